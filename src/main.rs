//! Bitpad host simulator.
//!
//! Runs the engine against a simulated board, driven by a script of
//! button actions, and logs everything the engine emits.
//!
//! ```text
//! bitpad-sim [--config engine.json] [--ticks N] "<script>"
//!
//!   script tokens:  A B C D | wait:N | hold:AB:N
//!   example:        bitpad-sim "B A A A A A A B D D"
//! ```
//!
//! `--ticks` appends N idle ticks after the script.  `RUST_LOG`-style
//! level names (`error` .. `trace`) in `BITPAD_LOG` set the log level.
#![deny(unused_must_use)]

use std::time::Instant;

use anyhow::{Context, Result, anyhow, bail};
use log::{Level, LevelFilter, Log, Metadata, Record, info};

use bitpad::adapters::log_sink::{Escaped, LogEventSink};
use bitpad::adapters::sim::{RecordingSink, SimBoard, Step, Tee, parse_script, run_script};
use bitpad::app::ports::LedId;
use bitpad::{AppService, EngineConfig};

// ── Console logger ────────────────────────────────────────────

struct ConsoleLogger {
    start: std::sync::OnceLock<Instant>,
}

static LOGGER: ConsoleLogger = ConsoleLogger {
    start: std::sync::OnceLock::new(),
};

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let elapsed = self.start.get_or_init(Instant::now).elapsed();
        let tag = match record.level() {
            Level::Error => "E",
            Level::Warn => "W",
            Level::Info => "I",
            Level::Debug => "D",
            Level::Trace => "V",
        };
        eprintln!(
            "{} ({:>6}) {}: {}",
            tag,
            elapsed.as_millis(),
            record.target(),
            record.args()
        );
    }

    fn flush(&self) {}
}

fn init_logger() -> Result<()> {
    let level = match std::env::var("BITPAD_LOG") {
        Ok(s) => s
            .parse::<LevelFilter>()
            .map_err(|_| anyhow!("BITPAD_LOG={s:?} is not a log level"))?,
        Err(_) => LevelFilter::Info,
    };
    log::set_logger(&LOGGER).map_err(|e| anyhow!("logger already installed: {e}"))?;
    log::set_max_level(level);
    Ok(())
}

// ── Arguments ─────────────────────────────────────────────────

struct Args {
    config: EngineConfig,
    script: Vec<Step>,
    idle_ticks: u32,
}

fn parse_args() -> Result<Args> {
    let mut config = EngineConfig::default();
    let mut script = None;
    let mut idle_ticks = 0;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let path = args.next().context("--config needs a path")?;
                let text = std::fs::read_to_string(&path)
                    .with_context(|| format!("reading {path}"))?;
                config = serde_json::from_str(&text)
                    .map_err(|e| anyhow!("parsing {path}: {e}"))?;
            }
            "--ticks" => {
                let n = args.next().context("--ticks needs a count")?;
                idle_ticks = n.parse().with_context(|| format!("--ticks {n:?}"))?;
            }
            s if s.starts_with("--") => bail!("unknown option {s}"),
            s => {
                if script.is_some() {
                    bail!("only one script argument is accepted (quote it)");
                }
                script = Some(parse_script(s).with_context(|| format!("script {s:?}"))?);
            }
        }
    }

    Ok(Args {
        config,
        script: script.context("missing script argument")?,
        idle_ticks,
    })
}

// ── Main ──────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_logger()?;
    let args = parse_args()?;

    info!("Bitpad simulator v{}", env!("CARGO_PKG_VERSION"));

    let mut app = AppService::new(args.config).context("engine configuration")?;
    let mut board = SimBoard::default();
    let mut log_sink = LogEventSink::new();
    let mut recorder = RecordingSink::new();

    {
        let mut sink = Tee(&mut log_sink, &mut recorder);
        app.start(&mut board, &mut sink);
        run_script(&args.script, &mut app, &mut board, &mut sink);
        run_script(&[Step::Wait(args.idle_ticks)], &mut app, &mut board, &mut sink);
    }

    let snap = app.snapshot();
    println!("state:      {:?} (resumes {:?})", snap.state, snap.last_state);
    println!("ticks:      {}", snap.total_ticks);
    println!(
        "pending:    {}/8 bits (0x{:02X})",
        snap.bit_index, snap.bit_buffer
    );
    println!("text:       \"{}\" ({} bytes)", Escaped(app.text()), snap.text_len);
    let leds: Vec<String> = LedId::ALL
        .iter()
        .map(|&id| format!("{:?}", app.led_output(id)))
        .collect();
    println!("leds:       {}", leds.join(" "));
    println!("events:     {}", recorder.events.len());
    Ok(())
}
