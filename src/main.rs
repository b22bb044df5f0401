use core::{AttributeKey, RosterPlayer, balance_teams, lookup_formation, weight_attributes};
use env_logger::Env;
use log::info;

fn main() {
    color_eyre::install().unwrap();

    env_logger::Builder::from_env(Env::default().default_filter_or("debug")).init();

    let roster = sample_roster();

    info!("balancing a 5-a-side roster of {} players", roster.len());

    let teams = balance_teams(&roster);

    info!(
        "home {:?} ({:.1}) vs away {:?} ({:.1}), gap {:.1}",
        teams.home.player_ids,
        teams.home.total_rating,
        teams.away.player_ids,
        teams.away.total_rating,
        teams.rating_gap()
    );

    if let Some(formation) = lookup_formation(roster.len(), "1-2-1") {
        info!("lining both sides up in a {}", formation.name);
        for slot in formation.slots {
            info!("  {} at ({:.0}%, {:.0}%)", slot.label, slot.x, slot.y);
        }
    }

    let star = &roster[0];
    info!("{} strengths as a {}:", star.name, star.position);
    for entry in weight_attributes(&star.attributes, &star.position) {
        info!("  {} {:.1} (raw {:.0} x {:.2})", entry.key, entry.score, entry.raw, entry.weight);
    }
}

fn sample_roster() -> Vec<RosterPlayer> {
    let cards: [(&str, &str, [f32; 6]); 10] = [
        ("Lucho", "DEL", [90.0, 85.0, 62.0, 80.0, 30.0, 55.0]),
        ("Rama", "DEL", [84.0, 78.0, 58.0, 74.0, 35.0, 60.0]),
        ("Santi", "MED", [70.0, 55.0, 86.0, 79.0, 52.0, 58.0]),
        ("Facu", "MED", [66.0, 60.0, 80.0, 72.0, 55.0, 62.0]),
        ("Nico", "MED", [72.0, 48.0, 75.0, 68.0, 50.0, 57.0]),
        ("Gonza", "DEF", [60.0, 32.0, 55.0, 45.0, 84.0, 78.0]),
        ("Tomi", "DEF", [64.0, 30.0, 52.0, 48.0, 80.0, 82.0]),
        ("Guille", "DEF", [58.0, 28.0, 50.0, 42.0, 76.0, 74.0]),
        ("Chapa", "POR", [48.0, 20.0, 55.0, 35.0, 82.0, 80.0]),
        ("Pipa", "POR", [50.0, 22.0, 52.0, 38.0, 78.0, 76.0]),
    ];

    cards
        .into_iter()
        .enumerate()
        .map(|(index, (name, position, values))| RosterPlayer {
            id: index as u32 + 1,
            name: name.to_string(),
            position: position.to_string(),
            attributes: AttributeKey::ALL.into_iter().zip(values.map(Some)).collect(),
        })
        .collect()
}
