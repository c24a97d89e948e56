//! Demo feed: fills the dashboard slots with sample content
//!
//! Stands in for the sensor, output and daemon collaborators when the
//! dashboard runs without a backend (`--demo`). Each slot goes through
//! `Loading` first so the loading state is visible.

use std::time::Duration;

use mycodo_core::prelude::*;
use mycodo_core::{GaugeSpec, DEFAULT_RANGE_COLORS};

use crate::panel::{PanelBody, PanelContent, PanelFeed, PanelSlotId, Reading};

/// Pause between demo updates
const STEP: Duration = Duration::from_millis(400);

/// Refresh period for the moving gauge value
const REFRESH: Duration = Duration::from_secs(2);

/// Spawn the demo feed on the current runtime
pub fn spawn_demo_feed(feed: PanelFeed) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        if let Err(e) = run_demo_feed(feed).await {
            // Closed channel means the UI has exited
            debug!("Demo feed stopped: {}", e);
        }
    })
}

/// Publish the initial demo content, then keep the gauge moving until the
/// receiving side goes away.
pub async fn run_demo_feed(feed: PanelFeed) -> Result<()> {
    for slot in PanelSlotId::ALL {
        feed.publish(slot, PanelContent::Loading).await?;
    }
    tokio::time::sleep(STEP).await;

    feed.publish(
        PanelSlotId::SensorReadings,
        PanelContent::Ready(PanelBody::Readings(sample_readings())),
    )
    .await?;
    tokio::time::sleep(STEP).await;

    feed.publish(
        PanelSlotId::Controls,
        PanelContent::text(["Relay 1 (pump): off", "Relay 2 (fan): on", "PWM 1 (light): 75%"]),
    )
    .await?;
    tokio::time::sleep(STEP).await;

    feed.publish(
        PanelSlotId::SystemStatus,
        PanelContent::Failed("daemon not reachable".to_string()),
    )
    .await?;
    info!("Demo content published");

    let mut tick: u32 = 0;
    loop {
        tokio::time::sleep(REFRESH).await;
        tick = tick.wrapping_add(1);
        feed.publish(
            PanelSlotId::SystemStatus,
            PanelContent::Ready(PanelBody::Gauge(demo_gauge(tick)?)),
        )
        .await?;
    }
}

fn sample_readings() -> Vec<Reading> {
    vec![
        Reading::new("Temperature", Some(23.4), "°C"),
        Reading::new("Humidity", Some(61.0), "%"),
        Reading::new("CO2", None, "ppm"),
    ]
}

/// CPU load gauge sweeping through its bands.
///
/// The default Mycodo bands stop at 80, so one more band covers 80-100.
fn demo_gauge(tick: u32) -> Result<GaugeSpec> {
    let value = f64::from(tick.wrapping_mul(7) % 100);
    Ok(GaugeSpec::new("CPU load", 0.0, 100.0)
        .with_range_colors(DEFAULT_RANGE_COLORS)?
        .with_stop_count(5)
        .with_unit("%")
        .with_value(value))
}
