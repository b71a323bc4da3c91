//! Literal ZHL-16C coefficient table, reproduced bit-exact from the
//! published values.
//! Columns: N2 half-time (min), N2 a, N2 b, He half-time (min), He a, He b.

pub type ZhlParam = f64;
pub type ZhlRow = (ZhlParam, ZhlParam, ZhlParam, ZhlParam, ZhlParam, ZhlParam);

pub const COMPARTMENT_COUNT: usize = 16;

pub const ZHL_16C_VALUES: [ZhlRow; COMPARTMENT_COUNT] = [
    (4.0, 1.2599, 0.5050, 1.51, 1.7424, 0.4245),
    (8.0, 1.0000, 0.6514, 3.02, 1.3830, 0.5747),
    (12.5, 0.8618, 0.7222, 4.72, 1.1919, 0.6527),
    (18.5, 0.7562, 0.7825, 6.99, 1.0458, 0.7223),
    (27.0, 0.6200, 0.8126, 10.21, 0.9220, 0.7582),
    (38.3, 0.5043, 0.8434, 14.48, 0.8205, 0.7957),
    (54.3, 0.4410, 0.8693, 20.53, 0.7305, 0.8279),
    (77.0, 0.4000, 0.8910, 29.11, 0.6502, 0.8553),
    (109.0, 0.3750, 0.9092, 41.20, 0.5950, 0.8757),
    (146.0, 0.3500, 0.9222, 55.19, 0.5545, 0.8903),
    (187.0, 0.3295, 0.9319, 70.69, 0.5333, 0.8997),
    (239.0, 0.3065, 0.9403, 90.34, 0.5189, 0.9073),
    (305.0, 0.2835, 0.9477, 115.29, 0.5181, 0.9122),
    (390.0, 0.2610, 0.9544, 147.42, 0.5176, 0.9171),
    (498.0, 0.2480, 0.9602, 188.24, 0.5172, 0.9217),
    (635.0, 0.2327, 0.9653, 240.03, 0.5119, 0.9267),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_sixteen_rows() {
        assert_eq!(ZHL_16C_VALUES.len(), COMPARTMENT_COUNT);
    }

    #[test]
    fn half_times_match_published_literal() {
        let n2_half_times: [f64; 16] = core::array::from_fn(|i| ZHL_16C_VALUES[i].0);
        assert_eq!(
            n2_half_times,
            [
                4.0, 8.0, 12.5, 18.5, 27.0, 38.3, 54.3, 77.0, 109.0, 146.0, 187.0, 239.0, 305.0,
                390.0, 498.0, 635.0
            ]
        );
        let he_half_times: [f64; 16] = core::array::from_fn(|i| ZHL_16C_VALUES[i].3);
        assert_eq!(
            he_half_times,
            [
                1.51, 3.02, 4.72, 6.99, 10.21, 14.48, 20.53, 29.11, 41.20, 55.19, 70.69, 90.34,
                115.29, 147.42, 188.24, 240.03
            ]
        );
    }
}
