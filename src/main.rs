use clap::Parser;
use fake_dice::{intercept_roll, FakeDiceConfig, RolledDice, RolledDie, UserRole, DEFAULT_TARGET};
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Roll some dice and run them through the module like the host would.
#[derive(Debug, Parser)]
#[command(name = "fake-dice", version)]
struct Args {
    /// Target every die has to pass, e.g. `>=10`
    #[arg(short, long, default_value = DEFAULT_TARGET)]
    target: String,
    #[arg(short, long, default_value_t = 20)]
    faces: u32,
    #[arg(short, long, default_value_t = 3)]
    count: usize,
    #[arg(short, long, default_value_t = 0, allow_hyphen_values = true)]
    modifier: i32,
    /// Roll as a player instead of the GM
    #[arg(long)]
    player: bool,
    /// Allow changing player rolls
    #[arg(long)]
    player_enabled: bool,
    /// Switch the module off
    #[arg(long)]
    disabled: bool,
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fake_dice=debug".into()),
        )
        .init();

    let args = Args::parse();
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let config = FakeDiceConfig {
        enabled: !args.disabled,
        player_enabled: args.player_enabled,
        target: args.target,
    };
    let role = if args.player {
        UserRole::Player
    } else {
        UserRole::Gm
    };

    let mut rolled = RolledDice::new(
        vec![RolledDie::roll_with(args.faces, args.count, &mut rng)],
        args.modifier,
    );
    println!("rolled: {rolled} = {}", rolled.total());

    let outcome = intercept_roll(&config, role, &mut rolled, &mut || rng.gen());
    println!("{outcome:?}");
    println!("result: {rolled} = {}", rolled.total());
}
