//! Lamps — colored indicators for boolean device signals.

/// One of the five indicator lamps on the operator panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lamp {
    Sensor1,
    Sensor3,
    WrapDone,
    Robot,
    Inverter,
}

/// Color a lamp is painted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LampColor {
    /// Sensor-style signal is active.
    Green,
    /// Drive-style signal is active.
    Blue,
    /// Any lamp that is off.
    Gray,
}

impl Lamp {
    /// All lamps, in display order.
    pub const ALL: [Self; 5] = [
        Self::Sensor1,
        Self::Sensor3,
        Self::WrapDone,
        Self::Robot,
        Self::Inverter,
    ];

    /// Wire identifier, identical to the snapshot field name.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Sensor1 => "sensor1",
            Self::Sensor3 => "sensor3",
            Self::WrapDone => "wrap_done",
            Self::Robot => "robot",
            Self::Inverter => "inverter",
        }
    }

    /// Color used while the signal is active.
    #[must_use]
    pub fn on_color(self) -> LampColor {
        match self {
            Self::Sensor1 | Self::Sensor3 | Self::WrapDone => LampColor::Green,
            Self::Robot | Self::Inverter => LampColor::Blue,
        }
    }

    /// Color for the given signal value. Off is gray for every lamp.
    #[must_use]
    pub fn color(self, on: bool) -> LampColor {
        if on {
            self.on_color()
        } else {
            LampColor::Gray
        }
    }
}

impl std::fmt::Display for Lamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl LampColor {
    /// Red, green and blue components.
    #[must_use]
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Self::Green => (0x38, 0x8e, 0x3c),
            Self::Blue => (0x29, 0x62, 0xff),
            Self::Gray => (0xcc, 0xcc, 0xcc),
        }
    }
}
