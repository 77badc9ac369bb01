/// Append-only fact table holding validated battle records.
pub const FACT_TABLE: &str = "fact_tournament_battles";

/// View over the fact table with cumulative per-battle stats. Always built.
pub const CUMULATIVE_VIEW: &str = "cumulative_battle_stats";

/// Analytical views built on request, one SQL script each.
pub const ANALYTICAL_VIEWS: [&str; 4] = [
    "top_used_pokemons",
    "matches_per_month",
    "type_matchup_ocurrences",
    "trainer_performance",
];
