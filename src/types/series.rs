use serde::Serialize;

/// One observation of a variable for the target calendar day in one year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ObservationPoint {
    pub year: i32,
    pub value: f64,
}

/// All observations of one variable for the target calendar day, ascending
/// by year. Built fresh per request and discarded with the response.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct VariableSeries {
    points: Vec<ObservationPoint>,
}

impl VariableSeries {
    /// Takes ownership of points already sorted ascending by year.
    pub fn new(points: Vec<ObservationPoint>) -> Self {
        debug_assert!(points.windows(2).all(|w| w[0].year <= w[1].year));
        Self { points }
    }

    pub fn points(&self) -> &[ObservationPoint] {
        &self.points
    }

    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }

    /// Values of the most recent `n` observations, oldest first.
    pub fn recent_values(&self, n: usize) -> Vec<f64> {
        let start = self.points.len().saturating_sub(n);
        self.points[start..].iter().map(|p| p.value).collect()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
