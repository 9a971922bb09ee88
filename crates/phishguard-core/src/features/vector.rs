//! Fixed-width feature vector.

use serde::{Serialize, Serializer};

use super::indicator::{Indicator, INDICATOR_COUNT};

/// The 48 indicator values, indexed by [`Indicator::position`].
///
/// Values are always finite: [`FeatureVector::set`] stores `0.0` in place of
/// NaN or infinities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector([f64; INDICATOR_COUNT]);

/// One named slot of a [`FeatureVector`], for display and JSON output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NamedValue {
    pub index: usize,
    pub name: &'static str,
    pub value: f64,
}

impl FeatureVector {
    pub fn zeroed() -> Self {
        Self([0.0; INDICATOR_COUNT])
    }

    pub(crate) fn set(&mut self, indicator: Indicator, value: f64) {
        self.0[indicator.position()] = if value.is_finite() { value } else { 0.0 };
    }

    pub fn get(&self, indicator: Indicator) -> f64 {
        self.0[indicator.position()]
    }

    pub fn len(&self) -> usize {
        INDICATOR_COUNT
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.0.to_vec()
    }

    /// Slots paired with their indicator names, in vector order.
    pub fn entries(&self) -> Vec<NamedValue> {
        Indicator::ALL
            .iter()
            .map(|&indicator| NamedValue {
                index: indicator.position(),
                name: indicator.name(),
                value: self.get(indicator),
            })
            .collect()
    }
}

impl Serialize for FeatureVector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.as_slice().serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_replaces_non_finite() {
        let mut v = FeatureVector::zeroed();
        v.set(Indicator::PctExtHyperlinks, f64::NAN);
        v.set(Indicator::UrlLength, f64::INFINITY);
        v.set(Indicator::NumDots, 3.0);
        assert_eq!(v.get(Indicator::PctExtHyperlinks), 0.0);
        assert_eq!(v.get(Indicator::UrlLength), 0.0);
        assert_eq!(v.get(Indicator::NumDots), 3.0);
    }

    #[test]
    fn serializes_as_flat_array() {
        let mut v = FeatureVector::zeroed();
        v.set(Indicator::NumDots, 2.0);
        let json = serde_json::to_value(v).unwrap();
        let arr = json.as_array().unwrap();
        assert_eq!(arr.len(), INDICATOR_COUNT);
        assert_eq!(arr[0], 2.0);
    }

    #[test]
    fn entries_follow_vector_order() {
        let entries = FeatureVector::zeroed().entries();
        assert_eq!(entries.len(), INDICATOR_COUNT);
        assert_eq!(entries[3].name, "url_length");
        assert_eq!(entries[47].index, 47);
    }
}
