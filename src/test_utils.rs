//! Test utilities shared by unit tests.
//!
//! Provides fixtures for feed records and deterministic random sources.

/// Fixtures for creating feed data and random sources.
pub mod fixtures {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::neo::feed::{AxisValue, NearEarthObjectRecord, NeoFeed, OrbitData};

    /// Seeded random source so placement is reproducible.
    pub fn seeded_rng(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    /// A record whose semi-major axis is the given number.
    pub fn record_with_axis(axis: f64) -> NearEarthObjectRecord {
        NearEarthObjectRecord {
            name: None,
            orbit_data: Some(OrbitData {
                semi_major_axis: Some(AxisValue::Number(axis)),
            }),
        }
    }

    /// Decode a feed body, panicking on malformed test input.
    pub fn feed_json(body: &str) -> NeoFeed {
        NeoFeed::from_json(body).expect("test feed JSON should decode")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let a: f64 = fixtures::seeded_rng(3).r#gen();
        let b: f64 = fixtures::seeded_rng(3).r#gen();
        assert_eq!(a, b);
    }

    #[test]
    fn test_record_with_axis() {
        assert_eq!(fixtures::record_with_axis(2.5).effective_semi_major_axis(), 2.5);
    }
}
