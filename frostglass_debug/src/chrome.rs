// Copyright 2026 the Frostglass Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chrome Trace Event Format exporter.
//!
//! [`export`] reads recorded bytes from a [`RecorderSink`](super::recorder::RecorderSink)
//! and writes [Chrome Trace Event Format][spec] JSON to the given writer.
//!
//! Each surface gets its own thread row (`tid` = surface id). A composition
//! shows up as a duration slice from mount to unmount, frames as instants
//! plus a counter track for the press scale.
//!
//! [spec]: https://docs.google.com/document/d/1CvAClvFfyA5R-PhYUmn5OOQtYMH4h6I0nSsKchNAySU

use std::io::{self, Write};

use serde_json::{Value, json};

use frostglass_core::time::Timebase;
use frostglass_core::trace::CompositionKind;

use crate::recorder::{RecordedEvent, decode};

/// Exports recorded events as Chrome Trace Event Format JSON.
///
/// The output is a complete JSON array of trace event objects, suitable for
/// loading into `chrome://tracing` or [Perfetto](https://ui.perfetto.dev/).
///
/// Timestamps are converted to microseconds using the provided [`Timebase`].
pub fn export(bytes: &[u8], timebase: Timebase, writer: &mut dyn Write) -> io::Result<()> {
    let mut events: Vec<Value> = Vec::new();

    for recorded in decode(bytes) {
        match recorded {
            RecordedEvent::Surface(e) => {
                events.push(json!({
                    "ph": "i",
                    "name": format!("Surface{:?}", e.kind),
                    "cat": "Surface",
                    "ts": ticks_to_us(e.timestamp.ticks(), timebase),
                    "pid": 0,
                    "tid": e.surface.0,
                    "s": "t",
                }));
            }
            RecordedEvent::Guard(e) => {
                events.push(json!({
                    "ph": "i",
                    "name": "Lifecycle",
                    "cat": "Lifecycle",
                    "ts": ticks_to_us(e.timestamp.ticks(), timebase),
                    "pid": 0,
                    "tid": e.surface.0,
                    "s": "t",
                    "args": {
                        "host": format!("{:?}", e.host),
                        "transition": format!("{:?}", e.transition),
                    }
                }));
            }
            RecordedEvent::Composition(e) => {
                let ph = match e.kind {
                    CompositionKind::Mounted => "B",
                    CompositionKind::Unmounted => "E",
                };
                events.push(json!({
                    "ph": ph,
                    "name": "Composition",
                    "cat": "Render",
                    "ts": ticks_to_us(e.timestamp.ticks(), timebase),
                    "pid": 0,
                    "tid": e.surface.0,
                }));
            }
            RecordedEvent::Tap(e) => {
                events.push(json!({
                    "ph": "i",
                    "name": "Tap",
                    "cat": "Input",
                    "ts": ticks_to_us(e.timestamp.ticks(), timebase),
                    "pid": 0,
                    "tid": e.surface.0,
                    "s": "t",
                    "args": {
                        "pressed": e.pressed,
                        "target_scale": e.target_scale,
                    }
                }));
            }
            RecordedEvent::Frame(e) => {
                let ts = ticks_to_us(e.now.ticks(), timebase);
                events.push(json!({
                    "ph": "i",
                    "name": "Frame",
                    "cat": "Render",
                    "ts": ts,
                    "pid": 0,
                    "tid": e.surface.0,
                    "s": "t",
                    "args": {
                        "frame_index": e.frame_index,
                        "angle": e.angle_degrees,
                        "updated_items": e.updated_items,
                        "damage_rects": e.damage_rects,
                        "full_damage": e.full_damage,
                    }
                }));
                events.push(json!({
                    "ph": "C",
                    "name": format!("scale#{}", e.surface.0),
                    "cat": "Render",
                    "ts": ts,
                    "pid": 0,
                    "args": {
                        "scale": e.scale,
                    }
                }));
            }
        }
    }

    serde_json::to_writer_pretty(writer, &events)?;
    Ok(())
}

fn ticks_to_us(ticks: u64, timebase: Timebase) -> f64 {
    timebase.ticks_to_nanos(ticks) as f64 / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recorder::RecorderSink;
    use frostglass_core::surface::SurfaceId;
    use frostglass_core::time::HostTime;
    use frostglass_core::trace::{CompositionEvent, FrameEvent, TapEvent, TraceSink};

    #[test]
    fn export_produces_valid_json() {
        let surface = SurfaceId(4);
        let mut rec = RecorderSink::new();
        rec.on_composition(&CompositionEvent {
            surface,
            kind: CompositionKind::Mounted,
            timestamp: HostTime(1_000_000),
        });
        rec.on_frame(&FrameEvent {
            surface,
            frame_index: 1,
            now: HostTime(1_016_667),
            angle_degrees: 0.0,
            scale: 1.0,
            updated_items: 5,
            damage_rects: 0,
            full_damage: true,
        });
        rec.on_tap(&TapEvent {
            surface,
            pressed: true,
            target_scale: 1.1,
            timestamp: HostTime(1_020_000),
        });
        rec.on_composition(&CompositionEvent {
            surface,
            kind: CompositionKind::Unmounted,
            timestamp: HostTime(2_000_000),
        });

        let mut out = Vec::new();
        export(rec.as_bytes(), Timebase::NANOS, &mut out).unwrap();
        let json_str = String::from_utf8(out).unwrap();

        let parsed: Vec<Value> = serde_json::from_str(&json_str).unwrap();
        assert_eq!(parsed.len(), 5, "a frame exports an instant and a counter");

        assert_eq!(parsed[0]["ph"], "B");
        assert_eq!(parsed[0]["tid"], 4);
        assert_eq!(parsed[0]["ts"], 1000.0);

        assert_eq!(parsed[1]["name"], "Frame");
        assert_eq!(parsed[1]["args"]["full_damage"], true);
        assert_eq!(parsed[2]["ph"], "C");
        assert_eq!(parsed[2]["args"]["scale"], 1.0);

        assert_eq!(parsed[3]["name"], "Tap");
        assert_eq!(parsed[3]["args"]["target_scale"], 1.1);

        assert_eq!(parsed[4]["ph"], "E");
        assert_eq!(parsed[4]["name"], "Composition");
    }

    #[test]
    fn export_empty_recording() {
        let mut out = Vec::new();
        export(&[], Timebase::NANOS, &mut out).unwrap();
        let json_str = String::from_utf8(out).unwrap();
        let parsed: Vec<Value> = serde_json::from_str(&json_str).unwrap();
        assert!(parsed.is_empty());
    }
}
