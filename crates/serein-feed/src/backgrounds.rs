//! Fondos visuales del feed, asignados cíclicamente por posición.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackgroundConfig {
    pub id: &'static str,
    pub gradient: [&'static str; 2],
}

const BACKGROUNDS: &[BackgroundConfig] = &[
    BackgroundConfig { id: "dawn", gradient: ["#f6d365", "#fda085"] },
    BackgroundConfig { id: "ocean", gradient: ["#2193b0", "#6dd5ed"] },
    BackgroundConfig { id: "forest", gradient: ["#11998e", "#38ef7d"] },
    BackgroundConfig { id: "night", gradient: ["#141e30", "#243b55"] },
    BackgroundConfig { id: "lavender", gradient: ["#b993d6", "#8ca6db"] },
];

/// Fondo para la posición `index` del feed; cicla sobre la paleta.
pub fn background_for_index(index: usize) -> BackgroundConfig {
    BACKGROUNDS[index % BACKGROUNDS.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycles_over_the_palette() {
        assert_eq!(background_for_index(0).id, "dawn");
        assert_eq!(background_for_index(4).id, "lavender");
        assert_eq!(background_for_index(5).id, "dawn");
        assert_eq!(background_for_index(12), background_for_index(2));
    }
}
