use serde::Serialize;

/// A named pitch position and where to draw it, as percentages of pitch
/// width (x) and height (y). y grows toward the own goal line.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct FormationSlot {
    pub label: &'static str,
    pub x: f32,
    pub y: f32,
}

const fn slot(label: &'static str, x: f32, y: f32) -> FormationSlot {
    FormationSlot { label, x, y }
}

/// A tactical template for one side: name plus ordered slot list, the
/// goalkeeper first. Slot count equals half the match roster.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct Formation {
    pub name: &'static str,
    pub slots: &'static [FormationSlot],
}

impl Formation {
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub fn goalkeeper_slot(&self) -> Option<&FormationSlot> {
        self.slots.iter().find(|slot| slot.label == "POR")
    }

    pub fn outfield_slots(&self) -> impl Iterator<Item = &FormationSlot> {
        self.slots.iter().filter(|slot| slot.label != "POR")
    }
}

const F_1_2_1: Formation = Formation {
    name: "1-2-1",
    slots: &[
        slot("POR", 50.0, 90.0),
        slot("DFC", 50.0, 70.0),
        slot("MI", 25.0, 45.0),
        slot("MD", 75.0, 45.0),
        slot("DEL", 50.0, 20.0),
    ],
};

const F_2_2: Formation = Formation {
    name: "2-2",
    slots: &[
        slot("POR", 50.0, 90.0),
        slot("DFC_I", 30.0, 68.0),
        slot("DFC_D", 70.0, 68.0),
        slot("DEL_I", 30.0, 28.0),
        slot("DEL_D", 70.0, 28.0),
    ],
};

const F_2_3_1: Formation = Formation {
    name: "2-3-1",
    slots: &[
        slot("POR", 50.0, 92.0),
        slot("DFC_I", 32.0, 72.0),
        slot("DFC_D", 68.0, 72.0),
        slot("MI", 18.0, 48.0),
        slot("MC", 50.0, 45.0),
        slot("MD", 82.0, 48.0),
        slot("DEL", 50.0, 20.0),
    ],
};

const F_3_2_1: Formation = Formation {
    name: "3-2-1",
    slots: &[
        slot("POR", 50.0, 92.0),
        slot("DFI", 22.0, 72.0),
        slot("DFC", 50.0, 76.0),
        slot("DFD", 78.0, 72.0),
        slot("MI", 35.0, 45.0),
        slot("MD", 65.0, 45.0),
        slot("DEL", 50.0, 20.0),
    ],
};

const F_4_4_2: Formation = Formation {
    name: "4-4-2",
    slots: &[
        slot("POR", 50.0, 93.0),
        slot("DFI", 15.0, 75.0),
        slot("DFC_I", 38.0, 78.0),
        slot("DFC_D", 62.0, 78.0),
        slot("DFD", 85.0, 75.0),
        slot("MI", 15.0, 48.0),
        slot("MC_I", 38.0, 52.0),
        slot("MC_D", 62.0, 52.0),
        slot("MD", 85.0, 48.0),
        slot("DEL_I", 38.0, 20.0),
        slot("DEL_D", 62.0, 20.0),
    ],
};

const F_4_3_3: Formation = Formation {
    name: "4-3-3",
    slots: &[
        slot("POR", 50.0, 93.0),
        slot("DFI", 15.0, 75.0),
        slot("DFC_I", 38.0, 78.0),
        slot("DFC_D", 62.0, 78.0),
        slot("DFD", 85.0, 75.0),
        slot("MC_I", 32.0, 50.0),
        slot("MC", 50.0, 56.0),
        slot("MC_D", 68.0, 50.0),
        slot("EXT_I", 18.0, 25.0),
        slot("DEL", 50.0, 18.0),
        slot("EXT_D", 82.0, 25.0),
    ],
};

/// Formations on offer per match format, keyed by total roster size across
/// both teams: 10 for 5-a-side, 14 for 7-a-side, 22 for 11-a-side.
pub const FORMATIONS: &[(usize, &[Formation])] = &[
    (10, &[F_1_2_1, F_2_2]),
    (14, &[F_2_3_1, F_3_2_1]),
    (22, &[F_4_4_2, F_4_3_3]),
];

pub fn formations_for_size(roster_size: usize) -> Option<&'static [Formation]> {
    FORMATIONS
        .iter()
        .find(|(size, _)| *size == roster_size)
        .map(|(_, formations)| *formations)
}

/// Two-level lookup: `None` when either the roster size or the formation
/// name is not registered. The caller decides what a miss means.
pub fn lookup_formation(roster_size: usize, name: &str) -> Option<&'static Formation> {
    formations_for_size(roster_size)?
        .iter()
        .find(|formation| formation.name == name)
}

pub fn formation_names(roster_size: usize) -> Vec<&'static str> {
    formations_for_size(roster_size)
        .map(|formations| formations.iter().map(|formation| formation.name).collect())
        .unwrap_or_default()
}

pub fn supported_roster_sizes() -> Vec<usize> {
    FORMATIONS.iter().map(|(size, _)| *size).collect()
}
