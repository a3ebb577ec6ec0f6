//! WebNeko entry point
//!
//! On the web the cat is mounted into the page. Natively this runs a headless
//! demo: the pointer hops along a fixed path and every frame is printed as one
//! JSON record per line.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    use webneko::consts::DEFAULT_SPRITE_BASE_URL;
    use webneko::{Config, IdlePolicy};

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    log::info!("WebNeko starting...");

    let config = Config::load();
    if let Err(e) = webneko::platform::web::start(config, IdlePolicy::Cycle, DEFAULT_SPRITE_BASE_URL) {
        log::error!("WebNeko failed to start: {:?}", e);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("WebNeko (native) starting...");

    if let Err(e) = headless::run() {
        log::error!("Fatal error: {e}");
        std::process::exit(1);
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use webneko::{Config, IdlePolicy, Neko, NekoError, Preset, StillTransition};

    /// Pointer stops: (tick at which the pointer jumps, x, y)
    const POINTER_PATH: [(u64, f64, f64); 4] = [
        (0, 0.0, 0.0),
        (12, 240.0, 90.0),
        (40, 60.0, 200.0),
        (70, 420.0, 30.0),
    ];

    /// Total ticks replayed
    const DEMO_TICKS: u64 = 100;

    /// Usage: `webneko [config.json | standard | classic] [yawn | itch | scratch | cycle | random]`
    fn config_from_args() -> Result<Config, NekoError> {
        match std::env::args().nth(1) {
            None => Ok(Config::default()),
            Some(arg) => match Preset::from_str(&arg) {
                Some(preset) => {
                    log::info!("Using {} preset", preset.as_str());
                    Ok(Config::from_preset(preset))
                }
                None => Config::load_file(&arg),
            },
        }
    }

    fn policy_from_args() -> Result<IdlePolicy, NekoError> {
        let Some(arg) = std::env::args().nth(2) else {
            return Ok(IdlePolicy::Cycle);
        };
        match arg.to_lowercase().as_str() {
            "cycle" => Ok(IdlePolicy::Cycle),
            "random" => Ok(IdlePolicy::Random),
            _ => StillTransition::from_str(&arg).map(IdlePolicy::Fixed).ok_or_else(|| {
                NekoError::InvalidConfig(format!("unknown idle animation: {arg}"))
            }),
        }
    }

    pub fn run() -> Result<(), NekoError> {
        let config = config_from_args()?;
        let policy = policy_from_args()?;
        log::info!("Idle policy: {:?}", policy);
        let mut neko = Neko::with_policy(config, policy, 42);

        println!("{}", neko.current_frame().to_json()?);
        for tick in 0..DEMO_TICKS {
            if let Some(&(_, x, y)) = POINTER_PATH.iter().rev().find(|(at, _, _)| *at <= tick) {
                neko.set_pointer(x, y);
            }
            let frame = neko.tick();
            println!("{}", frame.to_json()?);
        }

        log::info!(
            "Finished after {} ticks in state {} at ({:.1}, {:.1})",
            neko.ticks(),
            neko.state().name(),
            neko.position().x,
            neko.position().y
        );
        Ok(())
    }
}
