//! Robot components: links, joints, and their export capabilities

use glam::Vec3;
use quick_xml::escape::escape;
use serde::Serialize;
use uuid::Uuid;

use crate::error::ExportError;

/// Fixed effort bound written into every revolute joint's `<limit>` tag.
pub const DEFAULT_EFFORT: f32 = 100.0;
/// Fixed velocity bound written into every revolute joint's `<limit>` tag.
pub const DEFAULT_VELOCITY: f32 = 10.0;

/// A rigid body with mass and inertial properties
#[derive(Debug, Clone)]
pub struct Link {
    pub id: Uuid,
    pub name: String,
    /// Mass in kg
    pub mass: f32,
    /// Diagonal inertia moments [ixx, iyy, izz]
    pub inertia: [f32; 3],
    /// Center of mass relative to the link frame
    pub cm: Vec3,
}

impl Link {
    /// Create a new link. The name is taken as-is (no uniqueness check).
    pub fn new(name: impl Into<String>, mass: f32, inertia: [f32; 3], cm: Vec3) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            mass,
            inertia,
            cm,
        }
    }
}

/// Motion model of a joint
#[derive(Debug, Clone, PartialEq)]
pub enum JointKind {
    /// Connection with no motion model; has no URDF representation
    Unspecified,
    /// Rotation about the joint axis, bounded in radians
    Revolute { lower: f32, upper: f32 },
}

/// A kinematic connection between two links
///
/// Parent and child are referenced by link NAME only. Nothing resolves or
/// validates them; a joint may name links that were never registered.
#[derive(Debug, Clone)]
pub struct Joint {
    pub id: Uuid,
    pub name: String,
    /// Parent link name
    pub parent: String,
    /// Child link name
    pub child: String,
    /// Rotation/translation axis
    pub axis: Vec3,
    pub kind: JointKind,
}

impl Joint {
    /// Create a joint with no motion model
    pub fn new(
        name: impl Into<String>,
        parent: impl Into<String>,
        child: impl Into<String>,
        axis: Vec3,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            parent: parent.into(),
            child: child.into(),
            axis,
            kind: JointKind::Unspecified,
        }
    }

    /// Create a revolute joint with angular limits in radians
    pub fn revolute(
        name: impl Into<String>,
        parent: impl Into<String>,
        child: impl Into<String>,
        axis: Vec3,
        lower: f32,
        upper: f32,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            parent: parent.into(),
            child: child.into(),
            axis,
            kind: JointKind::Revolute { lower, upper },
        }
    }
}

/// Any component that can be registered into a [`Robot`](crate::Robot)
#[derive(Debug, Clone)]
pub enum Component {
    Link(Link),
    Joint(Joint),
}

impl Component {
    /// Unique identifier assigned at construction
    pub fn id(&self) -> Uuid {
        match self {
            Component::Link(l) => l.id,
            Component::Joint(j) => j.id,
        }
    }

    /// Caller-supplied name
    pub fn name(&self) -> &str {
        match self {
            Component::Link(l) => &l.name,
            Component::Joint(j) => &j.name,
        }
    }

    /// Discriminator string used as the `type` field in JSON exports
    pub fn kind(&self) -> &'static str {
        match self {
            Component::Link(_) => "Link",
            Component::Joint(j) => match j.kind {
                JointKind::Unspecified => "Joint",
                JointKind::Revolute { .. } => "RevoluteJoint",
            },
        }
    }

    /// Flat key-value record for the JSON snapshot
    ///
    /// Only links contribute fields beyond the id/name/type base; joints
    /// serialize as their base record.
    pub fn record(&self) -> ComponentRecord {
        let mut record = ComponentRecord {
            id: self.id(),
            name: self.name().to_owned(),
            kind: self.kind(),
            mass: None,
            inertia: None,
            cm: None,
        };
        if let Component::Link(link) = self {
            record.mass = Some(link.mass);
            record.inertia = Some(link.inertia);
            record.cm = Some(link.cm.to_array());
        }
        record
    }

    /// Self-contained XML fragment for the URDF tree
    ///
    /// Returns [`ExportError::Unimplemented`] for joints without a motion
    /// model; callers are expected to skip those.
    pub fn urdf_fragment(&self) -> Result<String, ExportError> {
        match self {
            Component::Link(link) => Ok(link_fragment(link)),
            Component::Joint(joint) => match joint.kind {
                JointKind::Revolute { lower, upper } => {
                    Ok(revolute_fragment(joint, lower, upper))
                }
                JointKind::Unspecified => {
                    Err(ExportError::Unimplemented(joint.name.clone()))
                }
            },
        }
    }
}

impl From<Link> for Component {
    fn from(link: Link) -> Self {
        Component::Link(link)
    }
}

impl From<Joint> for Component {
    fn from(joint: Joint) -> Self {
        Component::Joint(joint)
    }
}

/// One entry of the `components` array in the JSON snapshot
#[derive(Debug, Clone, Serialize)]
pub struct ComponentRecord {
    pub id: Uuid,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mass: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inertia: Option<[f32; 3]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cm: Option<[f32; 3]>,
}

/// Render a 3-vector as a whitespace-separated URDF attribute value
fn xyz_attr(v: Vec3) -> String {
    format!("{:?} {:?} {:?}", v.x, v.y, v.z)
}

// Caller-supplied strings are escaped before interpolation; numeric values
// never contain XML-special characters.

fn link_fragment(link: &Link) -> String {
    format!(
        r#"<link name="{name}">
  <inertial>
    <mass value="{mass:?}"/>
    <origin xyz="{origin}"/>
    <inertia ixx="{ixx:?}" iyy="{iyy:?}" izz="{izz:?}"/>
  </inertial>
</link>"#,
        name = escape(&link.name),
        mass = link.mass,
        origin = xyz_attr(link.cm),
        ixx = link.inertia[0],
        iyy = link.inertia[1],
        izz = link.inertia[2],
    )
}

fn revolute_fragment(joint: &Joint, lower: f32, upper: f32) -> String {
    format!(
        r#"<joint name="{name}" type="revolute">
  <parent link="{parent}"/>
  <child link="{child}"/>
  <axis xyz="{axis}"/>
  <limit effort="{effort:?}" velocity="{velocity:?}" lower="{lower:?}" upper="{upper:?}"/>
</joint>"#,
        name = escape(&joint.name),
        parent = escape(&joint.parent),
        child = escape(&joint.child),
        axis = xyz_attr(joint.axis),
        effort = DEFAULT_EFFORT,
        velocity = DEFAULT_VELOCITY,
        lower = lower,
        upper = upper,
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_link() -> Link {
        Link::new("base_link", 10.0, [1.0, 1.0, 1.0], Vec3::ZERO)
    }

    #[test]
    fn ids_are_unique_per_construction() {
        let a = sample_link();
        let b = sample_link();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn kind_discriminators() {
        let link: Component = sample_link().into();
        let bare: Component = Joint::new("j", "a", "b", Vec3::Z).into();
        let rev: Component = Joint::revolute("j", "a", "b", Vec3::Z, -1.0, 1.0).into();
        assert_eq!(link.kind(), "Link");
        assert_eq!(bare.kind(), "Joint");
        assert_eq!(rev.kind(), "RevoluteJoint");
    }

    #[test]
    fn link_record_carries_inertial_fields() {
        let link = Link::new("l", 2.0, [1.0, 2.0, 3.0], Vec3::new(0.5, 0.0, 0.0));
        let record = Component::from(link).record();
        assert_eq!(record.kind, "Link");
        assert_eq!(record.mass, Some(2.0));
        assert_eq!(record.inertia, Some([1.0, 2.0, 3.0]));
        assert_eq!(record.cm, Some([0.5, 0.0, 0.0]));
    }

    #[test]
    fn joint_record_has_no_extra_fields() {
        let joint = Joint::revolute("j", "a", "b", Vec3::Z, -1.0, 1.0);
        let record = Component::from(joint).record();
        assert!(record.mass.is_none());
        assert!(record.inertia.is_none());
        assert!(record.cm.is_none());
    }

    #[test]
    fn record_id_serializes_as_string() {
        let record = Component::from(sample_link()).record();
        let value = serde_json::to_value(&record).unwrap();
        assert!(value["id"].is_string());
        assert_eq!(value["type"], "Link");
    }

    #[test]
    fn link_fragment_shape() {
        let link = Link::new("l1", 5.0, [0.5, 0.5, 0.5], Vec3::new(0.5, 0.0, -0.25));
        let tag = Component::from(link).urdf_fragment().unwrap();
        assert!(tag.contains(r#"<link name="l1">"#));
        assert!(tag.contains(r#"<mass value="5.0"/>"#));
        // Coordinates are whitespace-separated, including negatives.
        assert!(tag.contains(r#"<origin xyz="0.5 0.0 -0.25"/>"#));
        assert!(tag.contains(r#"ixx="0.5" iyy="0.5" izz="0.5""#));
    }

    #[test]
    fn revolute_fragment_keeps_limits_distinct() {
        let joint = Joint::revolute("elbow", "link_1", "link_2", Vec3::Z, -1.5, 1.5);
        let tag = Component::from(joint).urdf_fragment().unwrap();
        assert!(tag.contains(r#"<joint name="elbow" type="revolute">"#));
        assert!(tag.contains(r#"<parent link="link_1"/>"#));
        assert!(tag.contains(r#"<child link="link_2"/>"#));
        assert!(tag.contains(r#"<axis xyz="0.0 0.0 1.0"/>"#));
        assert!(tag.contains(r#"lower="-1.5" upper="1.5""#));
        assert!(tag.contains(r#"effort="100.0" velocity="10.0""#));
    }

    #[test]
    fn fragment_escapes_xml_special_names() {
        let link = Link::new(r#"a&b"c"#, 1.0, [1.0, 1.0, 1.0], Vec3::ZERO);
        let tag = Component::from(link).urdf_fragment().unwrap();
        assert!(tag.contains(r#"<link name="a&amp;b&quot;c">"#));

        let joint = Joint::revolute("j<k", "p&q", "c&d", Vec3::Z, -1.0, 1.0);
        let tag = Component::from(joint).urdf_fragment().unwrap();
        assert!(tag.contains(r#"<joint name="j&lt;k" type="revolute">"#));
        assert!(tag.contains(r#"<parent link="p&amp;q"/>"#));
        assert!(tag.contains(r#"<child link="c&amp;d"/>"#));
    }

    #[test]
    fn unspecified_joint_has_no_fragment() {
        let joint: Component = Joint::new("j", "a", "b", Vec3::Z).into();
        match joint.urdf_fragment() {
            Err(ExportError::Unimplemented(name)) => assert_eq!(name, "j"),
            other => panic!("expected Unimplemented, got {other:?}"),
        }
    }
}
