pub mod air_density;
pub mod bag; // Bag model: reference tables scaled to clubhead speed
pub mod config; // Tuning configuration (YAML-loadable)
pub mod dispersion;
pub mod expected_strokes;
pub mod hole_strategy; // Par 3/4/5 helpers
pub mod plays_like; // Wind, elevation, lie, temperature, tendency
pub mod probability;
pub mod recommender; // Monte Carlo strokes-gained ranking
pub mod scenario; // Practice-mode random scenarios
pub mod shot_sampler;
pub mod sort_keys;

pub use bag::{build_bag, build_bag_for_green, compute_optimal_carry_for_target, Bag};
pub use config::EngineConfig;
pub use dispersion::{
    get_dispersion_sigma, get_lateral_sigma, lie_dispersion_factor, sigma_depth, sigma_lateral,
    simulate_dispersion_samples,
};
pub use expected_strokes::expected_strokes;
pub use hole_strategy::{
    par3_strategy, par4_strategy, par5_strategy, HoleContext, Par3Best, Par3Plan, Par4Plan,
    Par5Approach, Par5Plan, TeeOption,
};
pub use plays_like::{
    adjust_for_wind, apply_elevation, apply_lie, apply_temperature, apply_temperature_linear,
    apply_temperature_with, apply_tendency, calculate_plays_like_yardage, plays_like_breakdown,
    select_raw_target, PlaysLikeBreakdown, PlaysLikeInput,
};
pub use recommender::{recommend, recommend_shots_with_sg, simulation_rng};
pub use scenario::{generate_random_scenario, Scenario};
