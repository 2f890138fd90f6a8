/// Sequential color ramps for the scatter plots: viridis for the mean view,
/// plasma for single events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Palette {
    Viridis,
    Plasma,
}

const VIRIDIS: [(u8, u8, u8); 9] = [
    (68, 1, 84),
    (71, 44, 122),
    (59, 81, 139),
    (44, 113, 142),
    (33, 144, 141),
    (39, 173, 129),
    (92, 200, 99),
    (170, 220, 50),
    (253, 231, 37),
];

const PLASMA: [(u8, u8, u8); 9] = [
    (13, 8, 135),
    (70, 3, 159),
    (114, 1, 168),
    (156, 23, 158),
    (189, 55, 134),
    (216, 87, 107),
    (237, 121, 83),
    (251, 159, 58),
    (240, 249, 33),
];

impl Palette {
    fn anchors(self) -> &'static [(u8, u8, u8); 9] {
        match self {
            Palette::Viridis => &VIRIDIS,
            Palette::Plasma => &PLASMA,
        }
    }

    /// Samples the ramp at `t` in [0, 1], clamping out-of-range inputs.
    pub fn sample(self, t: f32) -> [u8; 3] {
        let anchors = self.anchors();
        let t = t.clamp(0.0, 1.0);
        let segments = (anchors.len() - 1) as f32;
        let x = t * segments;
        let i = x.floor() as usize;
        if i >= anchors.len() - 1 {
            let (r, g, b) = anchors[anchors.len() - 1];
            return [r, g, b];
        }
        let f = x - i as f32;
        let (r0, g0, b0) = anchors[i];
        let (r1, g1, b1) = anchors[i + 1];
        [
            (r0 as f32 + f * (r1 as f32 - r0 as f32)).round() as u8,
            (g0 as f32 + f * (g1 as f32 - g0 as f32)).round() as u8,
            (b0 as f32 + f * (b1 as f32 - b0 as f32)).round() as u8,
        ]
    }

    /// Maps a value onto the ramp given the series range. A flat range lands
    /// every value on the low end instead of failing.
    pub fn map(self, value: f64, min_value: f64, max_value: f64) -> [u8; 3] {
        let t = if max_value > min_value {
            ((value - min_value) / (max_value - min_value)).clamp(0.0, 1.0) as f32
        } else {
            0.0
        };
        self.sample(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ramp_endpoints_match_the_anchor_tables() {
        assert_eq!(Palette::Viridis.sample(0.0), [68, 1, 84]);
        assert_eq!(Palette::Viridis.sample(1.0), [253, 231, 37]);
        assert_eq!(Palette::Plasma.sample(0.0), [13, 8, 135]);
        assert_eq!(Palette::Plasma.sample(1.0), [240, 249, 33]);
    }

    #[test]
    fn sample_clamps_out_of_range_inputs() {
        assert_eq!(Palette::Viridis.sample(-0.5), Palette::Viridis.sample(0.0));
        assert_eq!(Palette::Plasma.sample(1.5), Palette::Plasma.sample(1.0));
    }

    #[test]
    fn flat_range_maps_to_the_low_end() {
        assert_eq!(Palette::Viridis.map(3.0, 3.0, 3.0), [68, 1, 84]);
    }

    #[test]
    fn map_normalizes_within_the_range() {
        let low = Palette::Plasma.map(0.0, 0.0, 10.0);
        let high = Palette::Plasma.map(10.0, 0.0, 10.0);
        assert_eq!(low, Palette::Plasma.sample(0.0));
        assert_eq!(high, Palette::Plasma.sample(1.0));
    }
}
