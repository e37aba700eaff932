//! Display status derived from a launch's success flag and date.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Display status of a launch.
///
/// Never stored; always computed from `success` and the launch date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LaunchStatus {
    Scheduled,
    Succeeded,
    Failed,
    Indeterminate,
}

impl LaunchStatus {
    /// Derives the status.
    ///
    /// | success | date      | status          |
    /// |---------|-----------|-----------------|
    /// | `true`  | any       | `Succeeded`     |
    /// | `false` | any       | `Failed`        |
    /// | `null`  | > now     | `Scheduled`     |
    /// | `null`  | <= now    | `Indeterminate` |
    pub fn derive(success: Option<bool>, launch_date: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        match success {
            Some(true) => Self::Succeeded,
            Some(false) => Self::Failed,
            None if launch_date > now => Self::Scheduled,
            None => Self::Indeterminate,
        }
    }

    /// Machine-readable code used by the JSON API.
    pub fn code(self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
            Self::Succeeded => "succeeded",
            Self::Failed => "failed",
            Self::Indeterminate => "indeterminate",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Scheduled => "Agendado",
            Self::Succeeded => "Lançado com Sucesso",
            Self::Failed => "Falhou",
            Self::Indeterminate => "Status Indeterminado",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Scheduled => "Lançamento programado para o futuro",
            Self::Succeeded => "Lançamento realizado com sucesso",
            Self::Failed => "Lançamento não foi bem-sucedido",
            Self::Indeterminate => "Status do lançamento não determinado",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Scheduled => "⏰",
            Self::Succeeded => "✅",
            Self::Failed => "❌",
            Self::Indeterminate => "❓",
        }
    }

    pub fn icon_alt(self) -> &'static str {
        match self {
            Self::Scheduled => "Ícone de relógio indicando agendamento",
            Self::Succeeded => "Ícone de check indicando sucesso",
            Self::Failed => "Ícone de xis indicando falha",
            Self::Indeterminate => "Ícone de interrogação indicando status indeterminado",
        }
    }

    /// Stylesheet modifier for the status badge.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Scheduled => "badge--scheduled",
            Self::Succeeded => "badge--success",
            Self::Failed => "badge--failed",
            Self::Indeterminate => "badge--unknown",
        }
    }
}
