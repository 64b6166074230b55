//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose the onboarding session (wizard + wheel) to Dart via FRB.
//! - Flatten core errors into stable `{ ok, message }` envelopes.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - One onboarding session per process; created lazily, dropped by
//!   `session_dispose`.
//! - Time enters only through `wheel_advance` or `wheel_poll`.

use log::warn;
use spinwheel_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    tip_catalog, Category, Easing, Identity, OnboardingService, RngSliceSource, SpinOutcome,
    WheelConfig, WheelState, WorkContext,
};
use std::sync::{Mutex, MutexGuard};
use std::time::{Duration, Instant};

const SEED_ENV: &str = "SPINWHEEL_SEED";
const SPIN_MS_ENV: &str = "SPINWHEEL_SPIN_MS";
const SNAP_MS_ENV: &str = "SPINWHEEL_SNAP_MS";

static SESSION: Mutex<Option<FfiSession>> = Mutex::new(None);

struct FfiSession {
    service: OnboardingService<'static, RngSliceSource>,
    last_poll: Option<Instant>,
}

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Idempotent for the same `level + log_dir`.
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Wheel labels in slice order, for painting the wheel.
#[flutter_rust_bridge::frb(sync)]
pub fn wheel_items() -> Vec<String> {
    Category::ALL
        .iter()
        .map(|category| category.label().to_string())
        .collect()
}

/// Wizard answers and position for rendering the current step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WizardSnapshot {
    /// Step number in `1..=4`.
    pub step: u8,
    pub full_name: String,
    pub email: String,
    pub mobile: Option<String>,
    /// Chosen category label.
    pub category: String,
    /// `Onshore|Offshore`, or `None` when skipped.
    pub context: Option<String>,
}

/// Wizard response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardResponse {
    pub ok: bool,
    pub snapshot: WizardSnapshot,
    pub message: String,
}

/// Outcome projection for Dart.
#[derive(Debug, Clone, PartialEq)]
pub struct WheelOutcomeItem {
    pub spin_id: String,
    pub chosen: String,
    pub landed: String,
    pub tip: String,
    pub final_rotation_degrees: f64,
}

/// Wheel render frame envelope.
#[derive(Debug, Clone, PartialEq)]
pub struct WheelFrame {
    pub ok: bool,
    pub message: String,
    pub is_spinning: bool,
    pub is_snapping: bool,
    pub cumulative_rotation_degrees: f64,
    /// Angle to animate toward.
    pub rendered_rotation_degrees: f64,
    /// Remaining animation time toward `rendered_rotation_degrees`.
    pub transition_ms: i64,
    /// `none|ease_out|ease_in_out`.
    pub easing: String,
    /// Latest outcome, kept until the next spin or a reset.
    pub outcome: Option<WheelOutcomeItem>,
    /// True only on the call that completed the spin.
    pub new_outcome: bool,
}

/// Returns the wizard snapshot, creating the session on first use.
#[flutter_rust_bridge::frb(sync)]
pub fn wizard_snapshot() -> WizardResponse {
    wizard_call("wizard_snapshot", |_| Ok(()))
}

/// Moves one step forward; saturates at step 4.
#[flutter_rust_bridge::frb(sync)]
pub fn wizard_next() -> WizardResponse {
    wizard_call("wizard_next", |session| {
        session.service.next_step();
        Ok(())
    })
}

/// Moves one step back; saturates at step 1. Leaving the wheel cancels a spin.
#[flutter_rust_bridge::frb(sync)]
pub fn wizard_back() -> WizardResponse {
    wizard_call("wizard_back", |session| {
        session.service.back();
        Ok(())
    })
}

/// Stores identity answers. Values are trimmed; a blank mobile becomes `None`.
#[flutter_rust_bridge::frb(sync)]
pub fn wizard_set_identity(
    full_name: String,
    email: String,
    mobile: Option<String>,
) -> WizardResponse {
    let identity = Identity {
        full_name: full_name.trim().to_string(),
        email: email.trim().to_string(),
        mobile: mobile
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty()),
    };
    wizard_call("wizard_set_identity", move |session| {
        session.service.set_identity(identity);
        Ok(())
    })
}

/// Chooses the category by label (case-insensitive).
#[flutter_rust_bridge::frb(sync)]
pub fn wizard_choose_category(label: String) -> WizardResponse {
    wizard_call("wizard_choose_category", |session| {
        let category = Category::from_label(&label).map_err(|err| err.to_string())?;
        session.service.choose_category(category);
        Ok(())
    })
}

/// Chooses the work context and jumps to the wheel; `None` skips the question.
#[flutter_rust_bridge::frb(sync)]
pub fn wizard_choose_context(label: Option<String>) -> WizardResponse {
    wizard_call("wizard_choose_context", |session| {
        match label.as_deref() {
            Some(value) => {
                let context = WorkContext::from_label(value).map_err(|err| err.to_string())?;
                session.service.choose_context(context);
            }
            None => {
                session.service.skip_context();
            }
        }
        Ok(())
    })
}

/// Starts a spin; rejected while one is in flight or before step 4.
#[flutter_rust_bridge::frb(sync)]
pub fn wheel_start_spin() -> WheelFrame {
    wheel_call("wheel_start_spin", |session| {
        session.service.spin().map_err(|err| err.to_string())?;
        session.last_poll = Some(Instant::now());
        Ok(false)
    })
}

/// Advances the spin lifecycle by host-measured time.
///
/// Negative values are treated as zero.
#[flutter_rust_bridge::frb(sync)]
pub fn wheel_advance(elapsed_ms: i64) -> WheelFrame {
    let elapsed = Duration::from_millis(u64::try_from(elapsed_ms).unwrap_or(0));
    wheel_call("wheel_advance", move |session| advance_session(session, elapsed))
}

/// Advances the spin lifecycle by wall-clock time since the previous poll.
#[flutter_rust_bridge::frb(sync)]
pub fn wheel_poll() -> WheelFrame {
    wheel_call("wheel_poll", |session| {
        let now = Instant::now();
        let elapsed = session
            .last_poll
            .map(|previous| now.saturating_duration_since(previous))
            .unwrap_or_default();
        session.last_poll = Some(now);
        advance_session(session, elapsed)
    })
}

/// Returns the current frame without moving time.
#[flutter_rust_bridge::frb(sync)]
pub fn wheel_snapshot() -> WheelFrame {
    wheel_call("wheel_snapshot", |_| Ok(false))
}

/// Clears the outcome and zeroes the wheel.
#[flutter_rust_bridge::frb(sync)]
pub fn wheel_reset() -> WheelFrame {
    wheel_call("wheel_reset", |session| {
        session.service.restart();
        session.last_poll = None;
        Ok(false)
    })
}

/// Drops the session, cancelling any in-flight spin.
///
/// Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn session_dispose() -> String {
    lock_session().take();
    String::new()
}

fn advance_session(session: &mut FfiSession, elapsed: Duration) -> Result<bool, String> {
    let completed = session
        .service
        .advance(elapsed)
        .map_err(|err| err.to_string())?;
    Ok(completed.is_some())
}

fn wizard_call(
    operation: &str,
    f: impl FnOnce(&mut FfiSession) -> Result<(), String>,
) -> WizardResponse {
    match with_session(|session| {
        let result = f(session);
        (result, to_wizard_snapshot(session))
    }) {
        Ok((Ok(()), snapshot)) => WizardResponse {
            ok: true,
            snapshot,
            message: String::new(),
        },
        Ok((Err(message), snapshot)) => WizardResponse {
            ok: false,
            snapshot,
            message: format!("{operation} failed: {message}"),
        },
        Err(message) => WizardResponse {
            ok: false,
            snapshot: WizardSnapshot::default(),
            message: format!("{operation} failed: {message}"),
        },
    }
}

fn wheel_call(
    operation: &str,
    f: impl FnOnce(&mut FfiSession) -> Result<bool, String>,
) -> WheelFrame {
    match with_session(|session| {
        let result = f(session);
        (result, session.service.wheel_state(), session.service.outcome().cloned())
    }) {
        Ok((Ok(new_outcome), state, outcome)) => to_wheel_frame(state, outcome, new_outcome, None),
        Ok((Err(message), state, outcome)) => to_wheel_frame(
            state,
            outcome,
            false,
            Some(format!("{operation} failed: {message}")),
        ),
        Err(message) => to_wheel_frame(
            WheelState::default(),
            None,
            false,
            Some(format!("{operation} failed: {message}")),
        ),
    }
}

fn with_session<T>(f: impl FnOnce(&mut FfiSession) -> T) -> Result<T, String> {
    let mut guard = lock_session();
    if guard.is_none() {
        *guard = Some(create_session()?);
    }
    match guard.as_mut() {
        Some(session) => Ok(f(session)),
        None => Err("onboarding session unavailable".to_string()),
    }
}

fn lock_session() -> MutexGuard<'static, Option<FfiSession>> {
    // A panic while holding the lock leaves plain data behind; reuse it.
    SESSION
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn create_session() -> Result<FfiSession, String> {
    let catalog = tip_catalog().map_err(|err| format!("tip catalog load failed: {err}"))?;
    let source = match read_env_u64(SEED_ENV) {
        Some(seed) => RngSliceSource::seeded(seed),
        None => RngSliceSource::from_entropy(),
    };
    let service = OnboardingService::new(catalog, resolve_wheel_config(), source)
        .map_err(|err| format!("session init failed: {err}"))?;
    Ok(FfiSession {
        service,
        last_poll: None,
    })
}

fn resolve_wheel_config() -> WheelConfig {
    let mut config = WheelConfig::default();
    if let Some(value) = read_env_u64(SPIN_MS_ENV) {
        config.spin_duration_ms = value;
    }
    if let Some(value) = read_env_u64(SNAP_MS_ENV) {
        config.snap_duration_ms = value;
    }
    config
}

fn read_env_u64(name: &str) -> Option<u64> {
    let raw = std::env::var(name).ok()?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.parse::<u64>() {
        Ok(value) => Some(value),
        Err(err) => {
            warn!("event=env_override module=ffi status=ignored name={name} error={err}");
            None
        }
    }
}

fn to_wizard_snapshot(session: &FfiSession) -> WizardSnapshot {
    let wizard = session.service.wizard();
    let identity = wizard.identity();
    WizardSnapshot {
        step: wizard.step().number(),
        full_name: identity.full_name.clone(),
        email: identity.email.clone(),
        mobile: identity.mobile.clone(),
        category: wizard.category().label().to_string(),
        context: wizard.context().map(|context| context.label().to_string()),
    }
}

fn to_wheel_frame(
    state: WheelState,
    outcome: Option<SpinOutcome>,
    new_outcome: bool,
    error: Option<String>,
) -> WheelFrame {
    WheelFrame {
        ok: error.is_none(),
        message: error.unwrap_or_default(),
        is_spinning: state.is_spinning,
        is_snapping: state.is_snapping,
        cumulative_rotation_degrees: state.cumulative_rotation_degrees,
        rendered_rotation_degrees: state.rendered_rotation_degrees,
        transition_ms: i64::try_from(state.transition.duration.as_millis()).unwrap_or(i64::MAX),
        easing: easing_label(state.transition.easing).to_string(),
        outcome: outcome.map(to_outcome_item),
        new_outcome,
    }
}

fn to_outcome_item(outcome: SpinOutcome) -> WheelOutcomeItem {
    WheelOutcomeItem {
        spin_id: outcome.spin_id.to_string(),
        chosen: outcome.chosen.label().to_string(),
        landed: outcome.landed.label().to_string(),
        tip: outcome.tip_text,
        final_rotation_degrees: outcome.final_rotation_degrees,
    }
}

fn easing_label(easing: Easing) -> &'static str {
    match easing {
        Easing::None => "none",
        Easing::EaseOut => "ease_out",
        Easing::EaseInOut => "ease_in_out",
    }
}
