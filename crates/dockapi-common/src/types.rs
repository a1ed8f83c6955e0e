//! Request model and the typed operations each domain accepts.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Category of target an operation acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Domain {
    /// A single container, addressed by name or ID.
    Container,
    /// An image reference.
    Image,
    /// A service of the configured compose project.
    Compose,
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Container => write!(f, "container"),
            Self::Image => write!(f, "image"),
            Self::Compose => write!(f, "compose"),
        }
    }
}

/// A decoded, not yet validated, operation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationRequest {
    /// Domain the request was sent to.
    pub domain: Domain,
    /// Operation name as sent by the caller.
    pub operation: String,
    /// Container name, image reference, or service name.
    pub target: String,
    /// Compose profile, if any.
    pub profile: Option<String>,
}

impl OperationRequest {
    /// Creates a request without a profile.
    pub fn new(domain: Domain, operation: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            domain,
            operation: operation.into(),
            target: target.into(),
            profile: None,
        }
    }

    /// Sets the compose profile. Empty profiles are treated as absent.
    #[must_use]
    pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
        let profile = profile.into();
        self.profile = (!profile.is_empty()).then_some(profile);
        self
    }
}

/// An operation name that the target domain does not know.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {domain} operation: {name}")]
pub struct UnknownOperation {
    /// Domain the name was parsed for.
    pub domain: Domain,
    /// Name that failed to parse.
    pub name: String,
}

/// Lifecycle operation on a single container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerOperation {
    /// Restart the container.
    Restart,
    /// Stop the container.
    Stop,
    /// Start the container.
    Start,
    /// Force-remove the container.
    Remove,
}

impl ContainerOperation {
    /// Wire name of the operation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Restart => "restart",
            Self::Stop => "stop",
            Self::Start => "start",
            Self::Remove => "remove",
        }
    }

    /// Capitalised name used in policy messages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Restart => "Restart",
            Self::Stop => "Stop",
            Self::Start => "Start",
            Self::Remove => "Remove",
        }
    }
}

impl FromStr for ContainerOperation {
    type Err = UnknownOperation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "restart" => Ok(Self::Restart),
            "stop" => Ok(Self::Stop),
            "start" => Ok(Self::Start),
            "remove" => Ok(Self::Remove),
            other => Err(UnknownOperation {
                domain: Domain::Container,
                name: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for ContainerOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Operation on an image reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageOperation {
    /// Pull the image from its registry.
    Pull,
}

impl ImageOperation {
    /// Wire name of the operation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pull => "pull",
        }
    }

    /// Capitalised name used in policy messages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pull => "Pull",
        }
    }
}

impl FromStr for ImageOperation {
    type Err = UnknownOperation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pull" => Ok(Self::Pull),
            other => Err(UnknownOperation {
                domain: Domain::Image,
                name: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for ImageOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Compose subcommand applied to one service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComposeOperation {
    /// `compose pull`
    Pull,
    /// `compose up`
    Up,
    /// `compose down`
    Down,
    /// `compose restart`
    Restart,
    /// `compose stop`
    Stop,
    /// `compose start`
    Start,
}

impl ComposeOperation {
    /// Every compose operation, in wire order.
    pub const ALL: [Self; 6] = [
        Self::Pull,
        Self::Up,
        Self::Down,
        Self::Restart,
        Self::Stop,
        Self::Start,
    ];

    /// Subcommand name passed to the compose tool.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pull => "pull",
            Self::Up => "up",
            Self::Down => "down",
            Self::Restart => "restart",
            Self::Stop => "stop",
            Self::Start => "start",
        }
    }
}

impl FromStr for ComposeOperation {
    type Err = UnknownOperation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| UnknownOperation {
                domain: Domain::Compose,
                name: s.to_string(),
            })
    }
}

impl fmt::Display for ComposeOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A request that passed validation and policy, ready to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Container lifecycle call against the engine.
    Container {
        /// Operation to run.
        operation: ContainerOperation,
        /// Container name or ID.
        name: String,
    },
    /// Image pull against the engine.
    PullImage {
        /// Image reference, possibly empty.
        reference: String,
    },
    /// Compose subprocess invocation.
    Compose {
        /// Subcommand to run.
        operation: ComposeOperation,
        /// Service the subcommand targets.
        service: String,
        /// Optional compose profile.
        profile: Option<String>,
    },
}
