use std::io::{self, BufRead};
use std::sync::{mpsc, Arc};
use std::thread;

use larder_core::{update, AppState, Msg};
use larder_store::{LocalStore, RecipeStore, RestStore};
use store_logging::store_info;

use crate::commands::{parse_command, Command, HELP};
use crate::config::Config;
use crate::effects::EffectRunner;
use crate::render;

/// Everything the platform loop can receive: store completions routed
/// through the effect runner, and parsed terminal commands.
enum Input {
    Core(Msg),
    Command(Command),
}

pub fn run(config: Config) -> anyhow::Result<()> {
    let store: Arc<dyn RecipeStore> = match &config.remote {
        Some(base_url) => {
            store_info!("Using REST store at {}", base_url);
            Arc::new(RestStore::new(base_url)?)
        }
        None => {
            store_info!("Using local store in {:?}", config.data_dir);
            Arc::new(LocalStore::open(&config.data_dir))
        }
    };

    let (input_tx, input_rx) = mpsc::channel::<Input>();
    let runner = EffectRunner::new(store, spawn_msg_forwarder(input_tx.clone()));
    spawn_stdin_reader(input_tx);

    println!("{HELP}");

    let mut state = AppState::new();
    // Kick off the collection load before the first command arrives.
    dispatch(&mut state, Msg::Started, &runner);

    while let Ok(input) = input_rx.recv() {
        match input {
            Input::Core(msg) => dispatch(&mut state, msg, &runner),
            Input::Command(Command::Dispatch(msgs)) => {
                for msg in msgs {
                    dispatch(&mut state, msg, &runner);
                }
            }
            Input::Command(Command::ShowList) => print_lines(&render::render(&state.view())),
            Input::Command(Command::Help) => println!("{HELP}"),
            Input::Command(Command::Unknown(reason)) => println!("{reason}"),
            Input::Command(Command::Quit) => break,
        }
    }
    Ok(())
}

fn dispatch(state: &mut AppState, msg: Msg, runner: &EffectRunner) {
    let (next, effects) = update(std::mem::take(state), msg);
    *state = next;
    runner.run(effects);
    if state.consume_dirty() {
        print_lines(&render::render(&state.view()));
    }
}

/// Bridges the effect runner's message channel into the input channel.
fn spawn_msg_forwarder(input_tx: mpsc::Sender<Input>) -> mpsc::Sender<Msg> {
    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    thread::spawn(move || {
        while let Ok(msg) = msg_rx.recv() {
            if input_tx.send(Input::Core(msg)).is_err() {
                return;
            }
        }
    });
    msg_tx
}

fn spawn_stdin_reader(input_tx: mpsc::Sender<Input>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else {
                break;
            };
            if input_tx.send(Input::Command(parse_command(&line))).is_err() {
                return;
            }
        }
        // Closed stdin quits the app.
        let _ = input_tx.send(Input::Command(Command::Quit));
    });
}

fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{line}");
    }
}
