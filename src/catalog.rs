//! The fixed body catalog: one central star and eight planets.
//!
//! Sizes and distances are scene units, not physical values. Bodies are
//! spread around the circle by list position, so the order of [`BODIES`]
//! matters.

/// Identifier for bodies in the scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CelestialBodyId {
    Sun,
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

impl CelestialBodyId {
    /// All planets (not including the Sun)
    pub const PLANETS: &'static [CelestialBodyId] = &[
        CelestialBodyId::Mercury,
        CelestialBodyId::Venus,
        CelestialBodyId::Earth,
        CelestialBodyId::Mars,
        CelestialBodyId::Jupiter,
        CelestialBodyId::Saturn,
        CelestialBodyId::Uranus,
        CelestialBodyId::Neptune,
    ];

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            CelestialBodyId::Sun => "Sun",
            CelestialBodyId::Mercury => "Mercury",
            CelestialBodyId::Venus => "Venus",
            CelestialBodyId::Earth => "Earth",
            CelestialBodyId::Mars => "Mars",
            CelestialBodyId::Jupiter => "Jupiter",
            CelestialBodyId::Saturn => "Saturn",
            CelestialBodyId::Uranus => "Uranus",
            CelestialBodyId::Neptune => "Neptune",
        }
    }

    /// Asset path of the surface texture, relative to the asset root.
    pub fn texture_path(&self) -> String {
        format!("{}/{}.jpg", TEXTURE_DIR, self.name().to_lowercase())
    }
}

/// Directory under the asset root holding body textures.
pub const TEXTURE_DIR: &str = "textures";

/// Static description of one body.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BodyDescriptor {
    pub id: CelestialBodyId,
    /// Sphere radius in scene units.
    pub radius: f32,
    /// Orbit radius around the origin.
    pub distance: f32,
    /// Angle added per frame, in radians. Zero for the central body.
    pub speed: f32,
}

impl BodyDescriptor {
    const fn new(id: CelestialBodyId, radius: f32, distance: f32, speed: f32) -> Self {
        Self {
            id,
            radius,
            distance,
            speed,
        }
    }

    /// Whether this body moves at all.
    pub fn is_orbiting(&self) -> bool {
        self.speed > 0.0
    }
}

/// Angular speed shared by every planet.
pub const PLANET_SPEED: f32 = 0.015;

/// Radius shared by every planet.
pub const PLANET_RADIUS: f32 = 6.0;

/// The scene catalog, in placement order.
pub const BODIES: [BodyDescriptor; 9] = [
    BodyDescriptor::new(CelestialBodyId::Sun, 10.0, 0.0, 0.0),
    BodyDescriptor::new(CelestialBodyId::Mercury, PLANET_RADIUS, 20.0, PLANET_SPEED),
    BodyDescriptor::new(CelestialBodyId::Venus, PLANET_RADIUS, 30.0, PLANET_SPEED),
    BodyDescriptor::new(CelestialBodyId::Earth, PLANET_RADIUS, 40.0, PLANET_SPEED),
    BodyDescriptor::new(CelestialBodyId::Mars, PLANET_RADIUS, 50.0, PLANET_SPEED),
    BodyDescriptor::new(CelestialBodyId::Jupiter, PLANET_RADIUS, 60.0, PLANET_SPEED),
    BodyDescriptor::new(CelestialBodyId::Saturn, PLANET_RADIUS, 70.0, PLANET_SPEED),
    BodyDescriptor::new(CelestialBodyId::Uranus, PLANET_RADIUS, 80.0, PLANET_SPEED),
    // Shares Uranus' orbit; the two stay apart because of their start angles.
    BodyDescriptor::new(CelestialBodyId::Neptune, PLANET_RADIUS, 80.0, PLANET_SPEED),
];

/// Get all bodies in the catalog.
pub fn all_bodies() -> &'static [BodyDescriptor] {
    &BODIES
}
