//! Host simulation of a firmware control loop.
//!
//! The loop joins a (simulated) network, then samples a sensor whose reading
//! arrives through a callback. Connection state is threaded through the
//! transition function rather than kept in a global.
//!
//! ```sh
//! RUST_LOG=debug FUNCY_CONNECT_RETRY_INTERVAL_MS=100 cargo run --example connect_loop
//! ```

use std::cell::Cell;

use funcy::control::Either;
use funcy::effect::{Async, IO, bridge};
use funcy::platform::{
    ConnectConfig, ConnectionState, ConnectionStatus, Credentials, NetworkDriver, SystemClock,
    connect, log_io,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// A radio that reports `Connected` after a fixed number of status polls.
struct SimulatedRadio {
    polls: Cell<u32>,
    polls_until_connected: u32,
}

impl NetworkDriver for SimulatedRadio {
    fn begin(&self, ssid: &str, _password: &str) {
        tracing::debug!(ssid, "radio: begin");
        self.polls.set(0);
    }

    fn status(&self) -> ConnectionStatus {
        let polls = self.polls.get() + 1;
        self.polls.set(polls);
        if polls > self.polls_until_connected {
            ConnectionStatus::Connected
        } else {
            ConnectionStatus::Disconnected
        }
    }

    fn local_address(&self) -> String {
        "192.168.4.21".to_string()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Connecting,
    Sampling,
    Done,
}

struct Machine {
    join: IO<Either<ConnectionState, ConnectionState>>,
    sample: Async<Either<f64, String>>,
}

/// One step of the loop: returns the next phase and the latest connection
/// state.
fn step(machine: &Machine, phase: Phase, state: ConnectionState) -> (Phase, ConnectionState) {
    match phase {
        Phase::Connecting => machine.join.run_unsafe().match_with(
            |failed| {
                log_io(format!("retrying: {}", failed.message)).run_unsafe();
                (Phase::Connecting, failed)
            },
            |connected| {
                log_io(connected.message.clone()).run_unsafe();
                (Phase::Sampling, connected)
            },
        ),
        Phase::Sampling => {
            machine.sample.run_async(|reading| {
                let line = reading.fold(|error| format!("sensor: {error}"), |volts| {
                    format!("sensor: {volts:.3} V")
                });
                log_io(line).run_unsafe();
            });
            (Phase::Done, state)
        }
        Phase::Done => (Phase::Done, state),
    }
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,funcy=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match ConnectConfig::from_env() {
        Ok(config) => config,
        Err(error) => {
            tracing::warn!("Failed to load configuration from environment: {error}");
            tracing::info!("Using default configuration");
            ConnectConfig::default()
        }
    };

    let radio = SimulatedRadio {
        polls: Cell::new(0),
        polls_until_connected: 3,
    };
    let join = connect(
        radio,
        SystemClock::new(),
        Credentials::new("workshop", "s3cret"),
        config,
    );

    let (adc, adc_ready) = Async::<u16>::deferred();
    let classified = bridge::lift_async::<u16, String>(adc).flat_map(|either| {
        Async::pure(either.flat_map(|raw| {
            if raw < 10 {
                Either::left("Sensor read too low".to_string())
            } else {
                Either::right(raw)
            }
        }))
    });
    let sample = bridge::map_async_either(classified, |raw| f64::from(raw) * 3.3 / 1023.0);

    let machine = Machine { join, sample };
    let mut iterations = 0_u32;
    let mut phase = Phase::Connecting;
    let mut state = ConnectionState::default();

    while phase != Phase::Done && iterations < 10 {
        iterations += 1;
        let (next_phase, next_state) = step(&machine, phase, state);
        phase = next_phase;
        state = next_state;
        // The ADC interrupt would fire here on hardware.
        if adc_ready.is_pending() && adc_ready.resolve(512).is_err() {
            tracing::warn!("ADC resolved with nothing waiting");
        }
    }

    tracing::info!(
        iterations,
        status = %state.status,
        address = %state.address,
        "control loop finished"
    );
}
