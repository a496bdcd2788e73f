/// Which flavour of the demo to run. Selects the bounce model, the scenery and the HUD wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SimulationVariant {
    /// Rest below 1.0 m/s, no ground friction, flat scenery.
    Classic,
    /// Rest below 0.5 m/s, 0.85 ground friction, sun rays and Moon craters.
    #[default]
    Extended,
}

impl SimulationVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            SimulationVariant::Classic => "classic",
            SimulationVariant::Extended => "extended",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "classic" | "basic" => Some(SimulationVariant::Classic),
            "extended" | "realistic" => Some(SimulationVariant::Extended),
            _ => None,
        }
    }
}
