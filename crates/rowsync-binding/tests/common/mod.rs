use rowsync_binding::errors::render_error;
use rowsync_binding::{ApplyMode, RenderTarget, Result};
use rowsync_core::{AnySection, Item, Snapshot};

/// A contact row keyed by a string handle
#[derive(Debug, Clone, PartialEq)]
pub struct Contact {
    pub handle: String,
    pub name: String,
}

impl Item for Contact {
    type Id = String;

    fn id(&self) -> String {
        self.handle.clone()
    }
}

#[allow(dead_code)]
pub fn contact(handle: &str, name: &str) -> Contact {
    Contact {
        handle: handle.to_string(),
        name: name.to_string(),
    }
}

#[allow(dead_code)]
pub fn group(key: &str, title: &str, rows: Vec<Contact>) -> AnySection<Contact> {
    AnySection::new(key, rows).with_title(title)
}

/// Render target that records every applied snapshot and mode
#[derive(Default)]
pub struct RecordingTarget {
    pub applied: Vec<(Snapshot<String>, ApplyMode)>,
    /// Number of upcoming applies to reject
    pub reject: usize,
}

impl RecordingTarget {
    #[allow(dead_code)]
    pub fn modes(&self) -> Vec<ApplyMode> {
        self.applied.iter().map(|(_, mode)| *mode).collect()
    }

    #[allow(dead_code)]
    pub fn last(&self) -> &Snapshot<String> {
        &self.applied.last().expect("nothing applied").0
    }
}

impl RenderTarget<String> for RecordingTarget {
    fn apply(&mut self, snapshot: &Snapshot<String>, mode: ApplyMode) -> Result<()> {
        if self.reject > 0 {
            self.reject -= 1;
            return Err(render_error("rejected by test target"));
        }
        self.applied.push((snapshot.clone(), mode));
        Ok(())
    }
}
