//! Export paths: JSON snapshot and URDF generation
//!
//! Both exporters iterate the robot's components in insertion order, so
//! repeated exports of an unchanged robot are byte-identical.

use std::fs;
use std::io;
use std::path::Path;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use quick_xml::{Reader, Writer};
use serde::Serialize;
use tracing::{debug, warn};

use crate::component::ComponentRecord;
use crate::error::ExportError;
use crate::robot::Robot;

/// Top-level shape of the JSON snapshot
#[derive(Serialize)]
struct Snapshot<'a> {
    robot_name: &'a str,
    components: Vec<ComponentRecord>,
}

impl Robot {
    /// Write a JSON snapshot of the model to `path`
    ///
    /// Produces `{ "robot_name": ..., "components": [...] }` with one record
    /// per component, pretty-printed with 4-space indent. Overwrites any
    /// existing file.
    pub fn save_json(&self, path: impl AsRef<Path>) -> Result<(), ExportError> {
        let snapshot = Snapshot {
            robot_name: self.name(),
            components: self.components().map(|c| c.record()).collect(),
        };

        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        snapshot.serialize(&mut ser)?;
        buf.push(b'\n');

        fs::write(path.as_ref(), buf)?;
        debug!(
            robot = self.name(),
            components = self.len(),
            path = %path.as_ref().display(),
            "wrote JSON snapshot"
        );
        Ok(())
    }

    /// Generate a URDF description of the model at `path`
    ///
    /// Each component contributes one child element under `<robot name="...">`,
    /// obtained by parsing its XML fragment and streaming it into the tree.
    /// Components without a URDF representation are skipped with a warning;
    /// a malformed fragment aborts the export.
    pub fn generate_urdf(&self, path: impl AsRef<Path>) -> Result<(), ExportError> {
        let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
        writer.write_event(Event::Decl(BytesDecl::new("1.0", None, None)))?;

        let mut root = BytesStart::new("robot");
        root.push_attribute(("name", self.name()));
        writer.write_event(Event::Start(root))?;

        for component in self.components() {
            match component.urdf_fragment() {
                Ok(fragment) => append_fragment(&mut writer, &fragment)?,
                Err(ExportError::Unimplemented(name)) => {
                    warn!(component = %name, "no URDF representation, skipping");
                }
                Err(e) => return Err(e),
            }
        }

        writer.write_event(Event::End(BytesEnd::new("robot")))?;
        let mut buf = writer.into_inner();
        buf.push(b'\n');

        fs::write(path.as_ref(), buf)?;
        debug!(
            robot = self.name(),
            path = %path.as_ref().display(),
            "wrote URDF description"
        );
        Ok(())
    }
}

/// Re-parse a component's fragment and append its elements to the tree
fn append_fragment<W: io::Write>(
    writer: &mut Writer<W>,
    fragment: &str,
) -> Result<(), ExportError> {
    let mut reader = Reader::from_str(fragment);
    reader.config_mut().trim_text(true);
    loop {
        match reader.read_event()? {
            Event::Eof => break,
            event => writer.write_event(event)?,
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
