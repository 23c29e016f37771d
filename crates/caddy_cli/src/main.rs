//! Caddy CLI
//!
//! Terminal front end for the strokes-gained engine: bag tables, plays-like
//! yardage, shot recommendations, hole strategy and practice scenarios.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use caddy_core::engine::hole_strategy::{par3_strategy, par4_strategy, par5_strategy, HoleContext};
use caddy_core::engine::plays_like::{plays_like_breakdown, select_raw_target, PlaysLikeInput};
use caddy_core::engine::{build_bag_for_green, compute_optimal_carry_for_target, generate_random_scenario, simulation_rng};
use caddy_core::models::{
    Elevation, FairwayWidth, GreenFirmness, GreenGeometry, HandicapProfile, LieQuality, SkillLevel,
    Strategy, Surface, Tendency, TroubleMap, TroubleSeverity, WindDirection, WindStrength,
};
use caddy_core::{recommend_shots_with_sg, EngineConfig, RankedRecommendation, Situation};

#[derive(Parser)]
#[command(name = "caddy")]
#[command(about = "Plays-like yardage and strokes-gained club recommendations", long_about = None)]
struct Cli {
    /// YAML file overriding the engine tuning
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Debug logging (RUST_LOG still wins when set)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the yardage table for a driver clubhead speed
    Bag {
        #[arg(long, default_value_t = 100.0)]
        speed: f64,
        #[arg(long, default_value = "Medium")]
        firmness: String,
    },

    /// Adjust a raw yardage for the conditions
    PlaysLike {
        #[command(flatten)]
        shot: ShotArgs,
    },

    /// Rank shots for the conditions
    Recommend {
        #[command(flatten)]
        shot: ShotArgs,

        #[arg(long, default_value_t = 100.0)]
        speed: f64,
        #[arg(long, default_value = "Intermediate")]
        skill: String,
        #[arg(long, default_value = "Tour / Scratch")]
        handicap: String,
        #[arg(long, default_value = "Balanced")]
        strategy: String,
        #[arg(long, default_value = "Medium")]
        firmness: String,

        #[arg(long, default_value = "None")]
        short_trouble: String,
        #[arg(long, default_value = "None")]
        long_trouble: String,
        #[arg(long, default_value = "None")]
        left_trouble: String,
        #[arg(long, default_value = "None")]
        right_trouble: String,

        /// Yards to the front edge (0 = unknown)
        #[arg(long, default_value_t = 0.0)]
        front: f64,
        /// Yards to the back edge (0 = unknown)
        #[arg(long, default_value_t = 0.0)]
        back: f64,
        /// Green width in yards (0 = unknown)
        #[arg(long, default_value_t = 0.0)]
        green_width: f64,
        /// Aim at the centre of the green instead of the pin
        #[arg(long)]
        center: bool,
        /// Surface the ball is played from
        #[arg(long, default_value = "fairway")]
        from: String,

        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        top_n: Option<usize>,
        /// Print the recommendations as JSON
        #[arg(long)]
        json: bool,
    },

    /// Tee strategy for a par 3, 4 or 5
    Hole {
        #[arg(long)]
        par: u8,
        #[arg(long)]
        yards: f64,
        #[arg(long, default_value_t = 100.0)]
        speed: f64,
        #[arg(long, default_value = "Medium")]
        fairway: String,
        #[arg(long, default_value = "Intermediate")]
        skill: String,
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Random practice scenario; try to guess the plays-like number
    Scenario {
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Args)]
struct ShotArgs {
    /// Measured yards to the pin
    #[arg(long)]
    yards: f64,
    #[arg(long, default_value = "None")]
    wind_dir: String,
    #[arg(long, default_value = "None")]
    wind_strength: String,
    #[arg(long, default_value = "Flat")]
    elevation: String,
    #[arg(long, default_value = "Good")]
    lie: String,
    #[arg(long, default_value = "Neutral")]
    tendency: String,
    /// Temperature in °F (omit to skip the adjustment)
    #[arg(long)]
    temp: Option<f64>,
}

impl ShotArgs {
    fn situation(&self) -> Situation {
        let mut situation = Situation::new()
            .with_wind(WindDirection::from_label(&self.wind_dir), WindStrength::from_label(&self.wind_strength))
            .with_elevation(Elevation::from_label(&self.elevation))
            .with_lie(LieQuality::from_label(&self.lie))
            .with_tendency(Tendency::from_label(&self.tendency));
        if let Some(temp) = self.temp {
            situation = situation.with_temperature(temp);
        }
        situation
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn load_config(path: Option<&PathBuf>) -> Result<EngineConfig> {
    match path {
        Some(path) => EngineConfig::from_yaml_file(path)
            .with_context(|| format!("failed to load config {}", path.display())),
        None => Ok(EngineConfig::from_env_or_default()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let config = load_config(cli.config.as_ref())?;
    debug!(?config, "engine config");

    match cli.command {
        Commands::Bag { speed, firmness } => {
            let bag = build_bag_for_green(speed, GreenFirmness::from_label(&firmness))?;
            println!("🏌️ Bag at {:.0} mph ({} greens)", bag.reference_speed, bag.green_firmness);
            println!("   {:<5} {:>7} {:>7} {:>6} {:>7}", "Club", "Carry", "Total", "Launch", "Spin");
            for row in &bag.full_bag {
                println!(
                    "   {:<5} {:>7.1} {:>7.1} {:>5.1}° {:>7.0}",
                    row.club.label(), row.carry, row.total, row.launch_deg, row.spin_rpm
                );
            }
            println!("\n   Scoring shots:");
            for shot in &bag.scoring_shots {
                println!("   {:<10} {:>6.1}", shot.name(), shot.carry);
            }
        }

        Commands::PlaysLike { shot } => {
            let situation = shot.situation();
            let b = plays_like_breakdown(&PlaysLikeInput::from_situation(shot.yards, &situation), &config.environment);
            println!("📏 Raw:          {:>6.1}", b.raw);
            println!("   Wind:         {:>6.1}", b.after_wind);
            println!("   Elevation:    {:>6.1}", b.after_elevation);
            println!("   Lie:          {:>6.1}", b.after_lie);
            println!("   Temperature:  {:>6.1}", b.after_temperature);
            println!("🎯 Plays like:   {:>6.1} ({:+.1})", b.plays_like, b.total_adjustment());
        }

        Commands::Recommend {
            shot,
            speed,
            skill,
            handicap,
            strategy,
            firmness,
            short_trouble,
            long_trouble,
            left_trouble,
            right_trouble,
            front,
            back,
            green_width,
            center,
            from,
            seed,
            top_n,
            json,
        } => {
            let mut config = config;
            if seed.is_some() {
                config.simulation.seed = seed;
            }
            if let Some(top_n) = top_n {
                config.simulation.top_n = top_n;
            }
            config.validate()?;

            let green = GreenGeometry { front_yards: front, back_yards: back, width: green_width, pin_lateral_offset: 0.0 };
            let situation = shot
                .situation()
                .with_skill(SkillLevel::from_label(&skill))
                .with_handicap(HandicapProfile::from_label(&handicap))
                .with_strategy(Strategy::from_label(&strategy))
                .with_green_firmness(GreenFirmness::from_label(&firmness))
                .with_green(green)
                .with_trouble(TroubleMap {
                    short: TroubleSeverity::from_label(&short_trouble),
                    long: TroubleSeverity::from_label(&long_trouble),
                    left: TroubleSeverity::from_label(&left_trouble),
                    right: TroubleSeverity::from_label(&right_trouble),
                })
                .with_start(shot.yards, Surface::from_label(&from))
                .with_center_aim(center);

            let raw_target = select_raw_target(shot.yards, &green, center);
            let breakdown = plays_like_breakdown(&PlaysLikeInput::from_situation(raw_target, &situation), &config.environment);
            let bag = build_bag_for_green(speed, situation.green_firmness)?;

            let mut rng = simulation_rng(config.simulation.seed);
            let recs = recommend_shots_with_sg(breakdown.plays_like, &bag.candidates, &situation, &config, &mut rng)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&recs)?);
            } else {
                print_recommendations(raw_target, breakdown.plays_like, &recs);
            }
        }

        Commands::Hole { par, yards, speed, fairway, skill, seed } => {
            let bag = build_bag_for_green(speed, GreenFirmness::Medium)?;
            let skill = SkillLevel::from_label(&skill);
            match par {
                3 => {
                    let mut rng = simulation_rng(seed.or(config.simulation.seed));
                    let situation = Situation::new().with_skill(skill);
                    let plan = par3_strategy(yards, &bag.candidates, &situation, &config, &mut rng)?;
                    match plan.best {
                        Some(best) => {
                            println!("⛳ Par 3, {:.0} yards: {}", yards, best.recommendation.shot.name());
                            println!("   On green:  {:>5.1}%", best.p_on_green * 100.0);
                            println!("   Within 10: {:>5.1}%", best.p_within_10 * 100.0);
                            println!("   SG vs par: {:>+5.2}", best.sg_vs_par);
                            for alt in &plan.alternatives {
                                println!("   alt: {:<10} SG {:+.2}", alt.shot.name(), alt.strokes_gained);
                            }
                        }
                        None => println!("⚠️  No club reaches {:.0} yards", yards),
                    }
                }
                4 | 5 => {
                    let ctx = HoleContext {
                        skill_factor: skill.factor(),
                        fairway_width: FairwayWidth::from_label(&fairway),
                        ..HoleContext::default()
                    };
                    if par == 4 {
                        let plan = par4_strategy(yards, &bag.full_bag, &ctx, &config)?;
                        println!("⛳ Par 4, {:.0} yards", yards);
                        for option in &plan.options {
                            println!(
                                "   {:<4} leaves {:>5.0}  miss {:>4.0}%  exp {:.2}  SG {:+.2}",
                                option.tee_club.label(),
                                option.remaining_yards,
                                option.miss_prob * 100.0,
                                option.expected_score,
                                option.sg_vs_baseline
                            );
                        }
                    } else {
                        match par5_strategy(yards, &bag.full_bag, &ctx, &config)? {
                            Some(plan) => {
                                println!("⛳ Par 5, {:.0} yards: {} off the tee", yards, plan.best_tee.tee_club);
                                println!("   {} (expected {:.2})", plan.approach.label(), plan.expected_score);
                                println!("   Layup score:    {:.2}", plan.layup_score);
                                match plan.go_for_it_score {
                                    Some(go) => println!("   Go-for-it score: {:.2}", go),
                                    None => println!("   Green out of reach in two"),
                                }
                            }
                            None => println!("⚠️  No tee club in the bag"),
                        }
                    }
                }
                other => anyhow::bail!("unsupported par {other} (expected 3, 4 or 5)"),
            }
        }

        Commands::Scenario { seed } => {
            let mut rng = simulation_rng(seed);
            let scenario = generate_random_scenario(&mut rng);
            println!("🎲 {:.0} yards, wind {} {}, {}, {} lie, {:.0}°F", scenario.raw_yards, scenario.wind_strength, scenario.wind_dir, scenario.elevation, scenario.lie, scenario.temp_f);
            println!("   Plays like: {:.1}", scenario.plays_like(&config.environment));
        }
    }

    Ok(())
}

fn print_recommendations(raw_target: f64, plays_like: f64, recs: &[RankedRecommendation]) {
    println!("🎯 {:.0} yards plays like {:.1}", raw_target, plays_like);
    if recs.is_empty() {
        println!("⚠️  No shot in the bag fits this yardage");
        return;
    }
    for (rank, rec) in recs.iter().enumerate() {
        println!(
            "\n{}. {:<10} total {:>5.1} ({:+.1})  SG {:+.2}  close {:>4.1}%",
            rank + 1,
            rec.shot.name(),
            rec.shot.total,
            rec.diff,
            rec.strokes_gained,
            rec.p_close * 100.0
        );
        println!("   carry target {:.1}", compute_optimal_carry_for_target(plays_like, rec.shot.category));
        println!("   {}", rec.rationale);
    }
}
