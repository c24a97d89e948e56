//! Dashboard panel slots and the feed external collaborators publish into
//!
//! The dashboard has three fixed, titled slots. What goes inside them is
//! supplied from outside the shell (sensor polling, output controls, daemon
//! status). A slot tolerates content that is absent, still loading, or
//! failed; none of those states change the grid.

use tokio::sync::mpsc;

use mycodo_core::prelude::*;
use mycodo_core::GaugeSpec;

use crate::message::Message;

/// Identifier of a dashboard slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelSlotId {
    SensorReadings,
    Controls,
    SystemStatus,
}

impl PanelSlotId {
    /// All slots in display order
    pub const ALL: [PanelSlotId; 3] = [
        PanelSlotId::SensorReadings,
        PanelSlotId::Controls,
        PanelSlotId::SystemStatus,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            PanelSlotId::SensorReadings => "Sensor Readings",
            PanelSlotId::Controls => "Controls",
            PanelSlotId::SystemStatus => "System Status",
        }
    }

    fn index(&self) -> usize {
        match self {
            PanelSlotId::SensorReadings => 0,
            PanelSlotId::Controls => 1,
            PanelSlotId::SystemStatus => 2,
        }
    }
}

/// One measurement line in a readings body
#[derive(Debug, Clone, PartialEq)]
pub struct Reading {
    pub label: String,
    /// `None` when the measurement is older than its max age or missing
    pub value: Option<f64>,
    pub unit: String,
}

impl Reading {
    pub fn new(label: impl Into<String>, value: Option<f64>, unit: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value,
            unit: unit.into(),
        }
    }

    /// Value with unit, or a dash when there is no value
    pub fn display_value(&self) -> String {
        match self.value {
            Some(v) if self.unit.is_empty() => format!("{v:.1}"),
            Some(v) => format!("{v:.1} {}", self.unit),
            None => "—".to_string(),
        }
    }
}

/// Renderable body supplied by domain code
#[derive(Debug, Clone, PartialEq)]
pub enum PanelBody {
    /// Free-form lines
    Text(Vec<String>),
    /// Label/value table
    Readings(Vec<Reading>),
    /// Single gauge with colored bands
    Gauge(GaugeSpec),
}

/// What a slot currently holds
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PanelContent {
    /// Nothing attached yet; the body area is reserved and blank
    #[default]
    Empty,
    /// A collaborator is fetching content
    Loading,
    Ready(PanelBody),
    /// The collaborator failed; the message is shown inside the panel
    Failed(String),
}

impl PanelContent {
    pub fn text<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Ready(PanelBody::Text(lines.into_iter().map(Into::into).collect()))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, PanelContent::Empty)
    }
}

/// A titled slot
#[derive(Debug, Clone, PartialEq)]
pub struct PanelSlot {
    pub id: PanelSlotId,
    pub content: PanelContent,
}

impl PanelSlot {
    pub fn title(&self) -> &'static str {
        self.id.title()
    }
}

/// The three dashboard slots, always in display order
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardPanels {
    slots: [PanelSlot; 3],
}

impl Default for DashboardPanels {
    fn default() -> Self {
        Self {
            slots: PanelSlotId::ALL.map(|id| PanelSlot {
                id,
                content: PanelContent::Empty,
            }),
        }
    }
}

impl DashboardPanels {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: PanelSlotId) -> &PanelSlot {
        &self.slots[id.index()]
    }

    /// Replace one slot's content; the other slots are untouched
    pub fn set(&mut self, id: PanelSlotId, content: PanelContent) {
        trace!("Panel {} <- {:?}", id.title(), content);
        self.slots[id.index()].content = content;
    }

    pub fn clear(&mut self, id: PanelSlotId) {
        self.set(id, PanelContent::Empty);
    }

    pub fn iter(&self) -> impl Iterator<Item = &PanelSlot> {
        self.slots.iter()
    }
}

/// Cloneable handle collaborators use to push content into a slot.
///
/// Updates travel through the app's message channel, so they are applied on
/// the UI thread in the order they were sent.
#[derive(Debug, Clone)]
pub struct PanelFeed {
    tx: mpsc::Sender<Message>,
}

impl PanelFeed {
    pub fn new(tx: mpsc::Sender<Message>) -> Self {
        Self { tx }
    }

    /// Publish, waiting for channel capacity
    pub async fn publish(&self, slot: PanelSlotId, content: PanelContent) -> Result<()> {
        self.tx
            .send(Message::PanelUpdate { slot, content })
            .await
            .map_err(|_| Error::ChannelClosed)
    }

    /// Publish from synchronous code; fails when the channel is full or closed
    pub fn try_publish(&self, slot: PanelSlotId, content: PanelContent) -> Result<()> {
        self.tx
            .try_send(Message::PanelUpdate { slot, content })
            .map_err(|e| match e {
                mpsc::error::TrySendError::Full(_) => {
                    Error::channel_send(format!("panel feed full, dropped {}", slot.title()))
                }
                mpsc::error::TrySendError::Closed(_) => Error::ChannelClosed,
            })
    }
}
