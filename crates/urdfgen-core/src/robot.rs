//! Robot container: a named collection of components keyed by name

use crate::component::Component;

/// A robot model: a name plus its registered components
///
/// Components are kept in insertion order, which is also the order of
/// elements in both export formats. Registering a component under a name
/// already in use silently replaces the previous one, keeping its position.
#[derive(Debug, Clone, Default)]
pub struct Robot {
    name: String,
    components: Vec<Component>,
}

impl Robot {
    /// Create an empty robot
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            components: Vec::new(),
        }
    }

    /// Robot name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Register a component, overwriting any existing one with the same name
    pub fn add_component(&mut self, component: impl Into<Component>) {
        let component = component.into();
        match self
            .components
            .iter_mut()
            .find(|c| c.name() == component.name())
        {
            Some(slot) => *slot = component,
            None => self.components.push(component),
        }
    }

    /// Look up a component by name
    pub fn component(&self, name: &str) -> Option<&Component> {
        self.components.iter().find(|c| c.name() == name)
    }

    /// Iterate over components in insertion order
    pub fn components(&self) -> impl Iterator<Item = &Component> {
        self.components.iter()
    }

    /// Number of registered components
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Whether no components are registered
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::component::{Joint, Link};

    #[test]
    fn lookup_hit_and_miss() {
        let mut robot = Robot::new("r");
        robot.add_component(Link::new("base", 1.0, [1.0, 1.0, 1.0], Vec3::ZERO));
        assert!(robot.component("base").is_some());
        assert!(robot.component("missing").is_none());
    }

    #[test]
    fn same_name_registration_overwrites() {
        let mut robot = Robot::new("r");
        robot.add_component(Link::new("l", 1.0, [1.0, 1.0, 1.0], Vec3::ZERO));
        robot.add_component(Link::new("l", 9.0, [2.0, 2.0, 2.0], Vec3::ZERO));
        assert_eq!(robot.len(), 1);
        match robot.component("l") {
            Some(Component::Link(link)) => assert_eq!(link.mass, 9.0),
            other => panic!("expected the second link, got {other:?}"),
        }
    }

    #[test]
    fn insertion_order_is_preserved() {
        let mut robot = Robot::new("r");
        robot.add_component(Link::new("a", 1.0, [1.0, 1.0, 1.0], Vec3::ZERO));
        robot.add_component(Joint::revolute("j", "a", "b", Vec3::Z, -1.0, 1.0));
        robot.add_component(Link::new("b", 1.0, [1.0, 1.0, 1.0], Vec3::ZERO));
        let names: Vec<&str> = robot.components().map(|c| c.name()).collect();
        assert_eq!(names, vec!["a", "j", "b"]);
    }

    #[test]
    fn overwrite_keeps_original_position() {
        let mut robot = Robot::new("r");
        robot.add_component(Link::new("a", 1.0, [1.0, 1.0, 1.0], Vec3::ZERO));
        robot.add_component(Link::new("b", 1.0, [1.0, 1.0, 1.0], Vec3::ZERO));
        robot.add_component(Link::new("a", 5.0, [1.0, 1.0, 1.0], Vec3::ZERO));
        let names: Vec<&str> = robot.components().map(|c| c.name()).collect();
        assert_eq!(names, vec!["a", "b"]);
    }
}
