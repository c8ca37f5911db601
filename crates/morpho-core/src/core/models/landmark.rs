use nalgebra::Point3;

/// A single labeled 3D landmark.
#[derive(Debug, Clone, PartialEq)]
pub struct LandmarkPoint {
    pub label: String,
    pub position: Point3<f64>,
}

impl LandmarkPoint {
    pub fn new(label: impl Into<String>, position: Point3<f64>) -> Self {
        Self {
            label: label.into(),
            position,
        }
    }
}

/// A named, ordered set of landmarks belonging to one subject.
///
/// Points keep insertion order; writers emit them in that order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubjectRecord {
    name: String,
    points: Vec<LandmarkPoint>,
}

impl SubjectRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            points: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn points(&self) -> &[LandmarkPoint] {
        &self.points
    }

    pub fn push(&mut self, point: LandmarkPoint) {
        self.points.push(point);
    }

    /// Removes every point but keeps the record's name and allocation.
    pub fn clear_points(&mut self) {
        self.points.clear();
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
