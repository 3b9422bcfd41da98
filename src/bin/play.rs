use std::error::Error;
use std::io::{self, Write};
use std::process;

use clap::{ArgAction, Parser};
use tracing_subscriber::EnvFilter;

use unobot::{
    Bot, GameBuilder, GameError, GameState, PlayerId, create_bot_from_spec, describe_event,
    label_for_spec, render_state,
};

const DEFAULT_SEED: u64 = 0xDEC0_1DED_5EED_F00D;

#[derive(Parser, Debug)]
#[command(name = "play", about = "Play a game of UNO against rule-based opponents.")]
struct Args {
    /// Number of seats when no bot specs are given
    #[arg(short = 'p', long = "players", default_value_t = 3)]
    players: usize,

    /// Seed for shuffling
    #[arg(short = 's', long = "seed", default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Cards dealt to each player
    #[arg(long = "hand-size", default_value_t = 7)]
    hand_size: usize,

    /// Let a bot take the human seat
    #[arg(long = "auto", action = ArgAction::SetTrue)]
    auto: bool,

    /// Print the table before every turn
    #[arg(long = "visualize", action = ArgAction::SetTrue)]
    visualize: bool,

    /// Stop after this many turns
    #[arg(long = "max-turns")]
    max_turns: Option<usize>,

    /// Seat specs in order: human[:name], random[:seed], heuristic (2-10 total)
    bots: Vec<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();
    if let Err(err) = run(args) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let specs = if args.bots.is_empty() {
        (0..args.players)
            .map(|seat| {
                if seat == 0 && !args.auto {
                    String::from("human")
                } else {
                    String::from("heuristic")
                }
            })
            .collect()
    } else {
        args.bots.clone()
    };
    let human_seat = specs.iter().position(|spec| label_for_spec(spec) == "human");

    let mut state = GameBuilder::new(specs.len())?
        .with_seed(args.seed)
        .with_hand_size(args.hand_size)
        .with_human_seat(human_seat)
        .build()?;

    let mut bots: Vec<Box<dyn Bot>> = Vec::with_capacity(specs.len());
    for (index, spec) in specs.iter().enumerate() {
        bots.push(create_bot_from_spec(spec, index, args.seed)?);
    }

    let observer = human_seat.unwrap_or(0);
    println!("Starting UNO with {} players.\n", specs.len());
    println!("{}", describe_event(&state.state_view(observer)?, &state.started_event()));

    loop {
        let turns = play_round(&mut state, &mut bots, &args, observer)?;
        if let Some(winner) = state.winner() {
            println!(
                "Game finished after {turns} turns. Winner: {}.",
                state.players()[winner].name
            );
        }
        if human_seat.is_none() || !ask_replay()? {
            break;
        }
        let transition = state.restart()?;
        let view = transition.state.state_view(observer)?;
        for event in &transition.events {
            println!("{}", describe_event(&view, event));
        }
        state = transition.state;
    }
    Ok(())
}

/// Runs bots until the game ends or the turn limit is hit. Returns the turns taken.
fn play_round(
    state: &mut GameState,
    bots: &mut [Box<dyn Bot>],
    args: &Args,
    observer: PlayerId,
) -> Result<usize, Box<dyn Error>> {
    let mut turns = 0usize;
    while !state.is_finished() {
        if let Some(limit) = args.max_turns {
            if turns >= limit {
                println!("Max turn limit {limit} reached. Stopping.");
                break;
            }
        }
        if args.visualize && !state.is_human_turn() {
            println!("{}", render_state(&state.state_view(observer)?));
        }
        let current = state.current_player();
        let transition = match state.step_with(bots[current].as_mut()) {
            Ok(transition) => transition,
            Err(GameError::InvalidAction(reason)) => {
                println!("Rejected: {reason}");
                continue;
            }
            Err(err) => return Err(err.into()),
        };
        let view = transition.state.state_view(observer)?;
        for event in &transition.events {
            println!("{}", describe_event(&view, event));
        }
        *state = transition.state;
        turns += 1;
    }
    Ok(turns)
}

fn ask_replay() -> Result<bool, Box<dyn Error>> {
    print!("New round? [y/N]: ");
    io::stdout().flush()?;
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    let answer = input.trim();
    Ok(answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes"))
}
