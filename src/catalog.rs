//! Action catalog
//!
//! The fixed set of device commands the backend understands, grouped by
//! device domain. Every action is a bodyless POST to
//! `<domain base path><suffix>`; the domain decides the result shape.
//!
//! | Domain | Base path | Result shape |
//! |--------|-----------|--------------|
//! | [`Domain::Climate`] | `/ac` | [`ActionResult`] |
//! | [`Domain::Lighting`] | `/light` | [`LightResult`] |

use crate::client::models::{ActionResult, LightResult};
use clap::ValueEnum;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;

/// Device domain served by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    /// Air conditioner / heater
    Climate,
    /// Ceiling light
    Lighting,
}

impl Domain {
    /// Path segment every action of this domain starts with
    pub fn base_path(&self) -> &'static str {
        match self {
            Domain::Climate => "/ac",
            Domain::Lighting => "/light",
        }
    }

    /// Human-readable domain name
    pub fn title(&self) -> &'static str {
        match self {
            Domain::Climate => "AC Control",
            Domain::Lighting => "Light Control",
        }
    }
}

/// Climate control actions, each answered with an [`ActionResult`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClimateAction {
    /// Turn on cooling
    AirconOn,
    /// Turn on heating
    HeaterOn,
    /// Turn off climate control
    Off,
    /// Raise the cooling target temperature
    AirconTempUp,
    /// Raise the heating target temperature
    HeaterTempUp,
    /// Lower the heating target temperature
    HeaterTempDown,
    /// Enable the shutoff timer
    TimerOn,
    /// Increase the timer duration
    TimerUp,
    /// Decrease the timer duration
    TimerDown,
}

/// Lighting actions, each answered with a [`LightResult`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LightAction {
    /// Set all-bright mode
    AllBright,
    /// Set bright mode
    Bright,
    /// Set dark mode
    Dark,
    /// Turn the light on
    On,
    /// Turn the light off
    Off,
}

/// All climate actions in presentation order
pub const CLIMATE_ACTIONS: [ClimateAction; 9] = [
    ClimateAction::AirconOn,
    ClimateAction::HeaterOn,
    ClimateAction::Off,
    ClimateAction::AirconTempUp,
    ClimateAction::HeaterTempUp,
    ClimateAction::HeaterTempDown,
    ClimateAction::TimerOn,
    ClimateAction::TimerUp,
    ClimateAction::TimerDown,
];

/// All lighting actions in presentation order
pub const LIGHT_ACTIONS: [LightAction; 5] = [
    LightAction::AllBright,
    LightAction::Bright,
    LightAction::Dark,
    LightAction::On,
    LightAction::Off,
];

/// An action type whose domain fixes its result shape
pub trait CatalogAction: Copy + Send + Sync + fmt::Debug + 'static {
    /// Decoded body of a successful response
    type Output: DeserializeOwned + Send + 'static;

    /// Domain the action belongs to
    const DOMAIN: Domain;

    /// Path below the domain base path, starting with `/`
    fn suffix(self) -> &'static str;

    /// Full backend path, e.g. `/ac/aircon/on`
    fn path(self) -> String {
        format!("{}{}", Self::DOMAIN.base_path(), self.suffix())
    }
}

impl ClimateAction {
    /// Logical name of the action
    pub fn description(self) -> &'static str {
        match self {
            ClimateAction::AirconOn => "turn on cooling",
            ClimateAction::HeaterOn => "turn on heating",
            ClimateAction::Off => "turn off climate control",
            ClimateAction::AirconTempUp => "raise cooling target temperature",
            ClimateAction::HeaterTempUp => "raise heating target temperature",
            ClimateAction::HeaterTempDown => "lower heating target temperature",
            ClimateAction::TimerOn => "enable shutoff timer",
            ClimateAction::TimerUp => "increase timer duration",
            ClimateAction::TimerDown => "decrease timer duration",
        }
    }

    /// Identifier the backend uses for this action (see `GET /ac/status`)
    pub fn backend_id(self) -> &'static str {
        match self {
            ClimateAction::AirconOn => "aircon_on",
            ClimateAction::HeaterOn => "heater_on",
            ClimateAction::Off => "off",
            ClimateAction::AirconTempUp => "aircon_temp_up",
            ClimateAction::HeaterTempUp => "heater_temp_up",
            ClimateAction::HeaterTempDown => "heater_temp_down",
            ClimateAction::TimerOn => "timer_on",
            ClimateAction::TimerUp => "timer_up",
            ClimateAction::TimerDown => "timer_down",
        }
    }
}

impl CatalogAction for ClimateAction {
    type Output = ActionResult;
    const DOMAIN: Domain = Domain::Climate;

    fn suffix(self) -> &'static str {
        match self {
            ClimateAction::AirconOn => "/aircon/on",
            ClimateAction::HeaterOn => "/heater/on",
            ClimateAction::Off => "/off",
            ClimateAction::AirconTempUp => "/aircon/temp/up",
            ClimateAction::HeaterTempUp => "/heater/temp/up",
            ClimateAction::HeaterTempDown => "/heater/temp/down",
            ClimateAction::TimerOn => "/timer/on",
            ClimateAction::TimerUp => "/timer/up",
            ClimateAction::TimerDown => "/timer/down",
        }
    }
}

impl LightAction {
    /// Logical name of the action
    pub fn description(self) -> &'static str {
        match self {
            LightAction::AllBright => "set all-bright mode",
            LightAction::Bright => "set bright mode",
            LightAction::Dark => "set dark mode",
            LightAction::On => "turn on",
            LightAction::Off => "turn off",
        }
    }

    /// Identifier the backend uses for this mode (see `GET /light/modes`)
    pub fn backend_id(self) -> &'static str {
        match self {
            LightAction::AllBright => "all_bright",
            LightAction::Bright => "bright",
            LightAction::Dark => "dark",
            LightAction::On => "on",
            LightAction::Off => "off",
        }
    }
}

impl CatalogAction for LightAction {
    type Output = LightResult;
    const DOMAIN: Domain = Domain::Lighting;

    fn suffix(self) -> &'static str {
        match self {
            LightAction::AllBright => "/all-bright",
            LightAction::Bright => "/bright",
            LightAction::Dark => "/dark",
            LightAction::On => "/on",
            LightAction::Off => "/off",
        }
    }
}

/// Any catalog action, for callers that pick the action at runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "domain", content = "action", rename_all = "lowercase")]
pub enum Action {
    Climate(ClimateAction),
    Light(LightAction),
}

impl Action {
    /// Every action in the catalog, climate first
    pub fn all() -> impl Iterator<Item = Action> {
        CLIMATE_ACTIONS
            .into_iter()
            .map(Action::Climate)
            .chain(LIGHT_ACTIONS.into_iter().map(Action::Light))
    }

    pub fn domain(&self) -> Domain {
        match self {
            Action::Climate(_) => Domain::Climate,
            Action::Light(_) => Domain::Lighting,
        }
    }

    /// Full backend path
    pub fn path(&self) -> String {
        match self {
            Action::Climate(a) => a.path(),
            Action::Light(a) => a.path(),
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Action::Climate(a) => a.description(),
            Action::Light(a) => a.description(),
        }
    }

    pub fn backend_id(&self) -> &'static str {
        match self {
            Action::Climate(a) => a.backend_id(),
            Action::Light(a) => a.backend_id(),
        }
    }

    /// Command line name, e.g. `aircon-temp-up`
    pub fn cli_name(&self) -> String {
        let value = match self {
            Action::Climate(a) => a.to_possible_value(),
            Action::Light(a) => a.to_possible_value(),
        };
        value
            .map(|v| v.get_name().to_string())
            .unwrap_or_default()
    }
}

impl From<ClimateAction> for Action {
    fn from(action: ClimateAction) -> Self {
        Action::Climate(action)
    }
}

impl From<LightAction> for Action {
    fn from(action: LightAction) -> Self {
        Action::Light(action)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.description(), self.path())
    }
}
