use std::collections::HashMap;

/// Fragment-identifier lookup for in-page navigation.
///
/// Links carry targets like `"#experience"`; sections register their
/// vertical offset under the bare id. Both spellings resolve.
#[derive(Debug, Default)]
pub struct AnchorIndex {
    targets: HashMap<String, u32>,
}

impl AnchorIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, id: &str, offset: u32) {
        self.targets
            .insert(id.trim_start_matches('#').to_string(), offset);
    }

    /// Accepts both `"about"` and `"#about"`.
    pub fn resolve(&self, href: &str) -> Option<u32> {
        self.targets.get(href.trim_start_matches('#')).copied()
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

/// Offsets for one smooth scroll from `from` to `to`, one per frame.
///
/// Eased in and out so the motion ramps instead of jumping. The last
/// element is always exactly `to`; `frames == 0` degenerates to an
/// instant jump.
pub fn glide(from: u32, to: u32, frames: u32) -> Vec<u32> {
    if frames == 0 || from == to {
        return vec![to];
    }
    let span = f64::from(to) - f64::from(from);
    (1..=frames)
        .map(|i| {
            let t = f64::from(i) / f64::from(frames);
            (f64::from(from) + span * ease_in_out_cubic(t)).round() as u32
        })
        .collect()
}

fn ease_in_out_cubic(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}
