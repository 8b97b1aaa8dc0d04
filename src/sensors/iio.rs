//! Linux Industrial I/O (IIO) sensor platform.
//!
//! Sensors are discovered under `/sys/bus/iio/devices/iio:device*` by the
//! channel files they expose. A started subscription polls its channel files
//! on a background thread and forwards samples to the UI thread through the
//! registry's event channel.
//!
//! Values follow the IIO convention `processed = (raw + offset) * scale`.

use crate::sensors::platform::{SensorPlatform, SensorSubscription};
use crate::sensors::types::{
    FrequencyHint, PlatformEvent, Quaternion, Reading, ReadingValues, SensorError, SensorFault,
    SensorKind, SubscriptionKey, Vector3,
};
use crossbeam::channel::Sender;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

/// Default sysfs location of IIO devices.
pub const DEFAULT_IIO_ROOT: &str = "/sys/bus/iio/devices";

/// Polling rate used when neither the user nor the configuration gives one.
pub const FALLBACK_POLL_HZ: f64 = 60.0;

/// Upper bound on the polling rate.
pub const MAX_POLL_HZ: f64 = 1000.0;

/// Lower bound on the polling rate.
pub const MIN_POLL_HZ: f64 = 0.01;

/// IIO reports magnetic field in gauss; readings are in microtesla.
const GAUSS_TO_MICROTESLA: f64 = 100.0;

/// Device names the HID sensor hub uses for orientation sensors.
const ABSOLUTE_ORIENTATION_DEVICE: &str = "dev_rotation";
const RELATIVE_ORIENTATION_DEVICE: &str = "relative_orientation";

/// One scaled IIO channel file.
#[derive(Debug, Clone, PartialEq)]
struct Channel {
    path: PathBuf,
    scale: f64,
    offset: f64,
}

impl Channel {
    fn read(&self) -> io::Result<f64> {
        let raw = read_f64(&self.path)?;
        Ok((raw + self.offset) * self.scale)
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Source {
    Scalar(Channel),
    Triple([Channel; 3], f64),
    Quaternion { path: PathBuf, scale: f64 },
}

/// A sensor found under the IIO root.
#[derive(Debug, Clone, PartialEq)]
pub struct IioDevice {
    /// Device directory
    pub path: PathBuf,
    /// Contents of the device's `name` file
    pub name: String,
    /// Kind this device provides
    pub kind: SensorKind,
    source: Source,
}

impl IioDevice {
    /// Probe one `iio:deviceN` directory. A combined IMU yields several devices.
    pub fn probe(dir: &Path) -> Vec<IioDevice> {
        let name = std::fs::read_to_string(dir.join("name"))
            .map(|s| s.trim().to_string())
            .unwrap_or_default();

        let mut found = Vec::new();
        let mut push = |kind: SensorKind, source: Source| {
            found.push(IioDevice {
                path: dir.to_path_buf(),
                name: name.clone(),
                kind,
                source,
            });
        };

        if dir.join("in_illuminance_input").exists() {
            push(
                SensorKind::AmbientLight,
                Source::Scalar(Channel {
                    path: dir.join("in_illuminance_input"),
                    scale: 1.0,
                    offset: 0.0,
                }),
            );
        } else if let Some(channel) = scalar_channel(dir, "in_illuminance") {
            push(SensorKind::AmbientLight, Source::Scalar(channel));
        }

        if let Some(axes) = triple_channel(dir, "in_accel") {
            push(SensorKind::Accelerometer, Source::Triple(axes, 1.0));
        }
        if let Some(axes) = triple_channel(dir, "in_anglvel") {
            push(SensorKind::Gyroscope, Source::Triple(axes, 1.0));
        }
        if let Some(axes) = triple_channel(dir, "in_magn") {
            push(SensorKind::Magnetometer, Source::Triple(axes, GAUSS_TO_MICROTESLA));
        }

        let quaternion = dir.join("in_rot_quaternion_raw");
        if quaternion.exists() {
            let kind = match name.as_str() {
                ABSOLUTE_ORIENTATION_DEVICE => Some(SensorKind::AbsoluteOrientation),
                RELATIVE_ORIENTATION_DEVICE => Some(SensorKind::RelativeOrientation),
                _ => None,
            };
            if let Some(kind) = kind {
                let scale = first_f64(
                    &[dir.join("in_rot_quaternion_scale"), dir.join("in_rot_scale")],
                    1.0,
                );
                push(
                    kind,
                    Source::Quaternion {
                        path: quaternion,
                        scale,
                    },
                );
            }
        }

        found
    }

    /// Read one sample.
    pub fn sample(&self) -> io::Result<ReadingValues> {
        match &self.source {
            Source::Scalar(channel) => Ok(ReadingValues::Illuminance(channel.read()?)),
            Source::Triple([x, y, z], factor) => Ok(ReadingValues::Vector(Vector3::new(
                x.read()? * factor,
                y.read()? * factor,
                z.read()? * factor,
            ))),
            Source::Quaternion { path, scale } => {
                let text = std::fs::read_to_string(path)?;
                let parts = text
                    .split_whitespace()
                    .map(|part| part.parse::<f64>().map(|v| v * scale))
                    .collect::<Result<Vec<_>, _>>()
                    .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

                match parts.as_slice() {
                    [x, y, z, w] => Ok(ReadingValues::Quaternion(Quaternion::new(*x, *y, *z, *w))),
                    _ => Err(io::Error::new(
                        io::ErrorKind::InvalidData,
                        format!("expected 4 quaternion components, got {}", parts.len()),
                    )),
                }
            }
        }
    }
}

/// Sensor platform backed by the IIO sysfs tree.
pub struct IioPlatform {
    root: PathBuf,
    default_poll_hz: f64,
    devices: Vec<IioDevice>,
    origin: Instant,
}

impl IioPlatform {
    /// Scan `root` for sensors.
    pub fn new(root: impl Into<PathBuf>, default_poll_hz: f64) -> Self {
        let root = root.into();
        let default_poll_hz = if default_poll_hz.is_finite() && default_poll_hz > 0.0 {
            default_poll_hz
        } else {
            FALLBACK_POLL_HZ
        };

        let mut platform = Self {
            root,
            default_poll_hz,
            devices: Vec::new(),
            origin: Instant::now(),
        };
        platform.rescan();
        platform
    }

    /// Re-read the device list.
    pub fn rescan(&mut self) {
        self.devices = scan_devices(&self.root);
        tracing::info!(
            "Found {} IIO sensor(s) under {}",
            self.devices.len(),
            self.root.display()
        );
        for device in &self.devices {
            tracing::debug!(
                "  {} ({}) at {}",
                device.kind.name(),
                device.name,
                device.path.display()
            );
        }
    }

    /// Discovered devices.
    pub fn devices(&self) -> &[IioDevice] {
        &self.devices
    }

    fn poll_period(&self, frequency: FrequencyHint) -> Duration {
        let hz = frequency.hz().unwrap_or(self.default_poll_hz).clamp(MIN_POLL_HZ, MAX_POLL_HZ);
        Duration::from_secs_f64(1.0 / hz)
    }
}

impl SensorPlatform for IioPlatform {
    fn open(
        &self,
        kind: SensorKind,
        frequency: FrequencyHint,
        key: SubscriptionKey,
        events: Sender<PlatformEvent>,
    ) -> Result<Box<dyn SensorSubscription>, SensorError> {
        let device = self
            .devices
            .iter()
            .find(|device| device.kind == kind)
            .cloned()
            .ok_or(SensorError::UnsupportedSensorKind(kind))?;

        Ok(Box::new(IioSubscription {
            key,
            device,
            period: self.poll_period(frequency),
            origin: self.origin,
            events,
            running: None,
        }))
    }

    fn available_kinds(&self) -> Vec<SensorKind> {
        let mut kinds: Vec<SensorKind> = Vec::new();
        for device in &self.devices {
            if !kinds.contains(&device.kind) {
                kinds.push(device.kind);
            }
        }
        kinds
    }
}

/// Polling subscription to one IIO device.
pub struct IioSubscription {
    key: SubscriptionKey,
    device: IioDevice,
    period: Duration,
    origin: Instant,
    events: Sender<PlatformEvent>,
    running: Option<Arc<AtomicBool>>,
}

impl IioSubscription {
    fn poll(
        key: SubscriptionKey,
        device: IioDevice,
        period: Duration,
        origin: Instant,
        events: Sender<PlatformEvent>,
        running: Arc<AtomicBool>,
    ) {
        let mut activated = false;

        while running.load(Ordering::Acquire) {
            match device.sample() {
                Ok(values) => {
                    if !activated {
                        activated = true;
                        if events.send(PlatformEvent::activated(key)).is_err() {
                            break;
                        }
                    }

                    let reading = Reading {
                        timestamp: origin.elapsed().as_secs_f64() * 1000.0,
                        values,
                    };
                    if events.send(PlatformEvent::reading(key, reading)).is_err() {
                        // Registry is gone
                        break;
                    }
                }
                Err(e) => {
                    tracing::warn!("Reading {} failed: {}", device.path.display(), e);
                    let fault = SensorFault::new(
                        "NotReadableError",
                        format!("{}: {}", device.path.display(), e),
                    );
                    let _ = events.send(PlatformEvent::error(key, fault));
                    break;
                }
            }

            thread::sleep(period);
        }

        running.store(false, Ordering::Release);
    }
}

impl SensorSubscription for IioSubscription {
    fn start(&mut self) {
        if self.is_running() {
            return;
        }

        let running = Arc::new(AtomicBool::new(true));
        let key = self.key;
        let device = self.device.clone();
        let period = self.period;
        let origin = self.origin;
        let events = self.events.clone();
        let flag = running.clone();

        let spawned = thread::Builder::new()
            .name(format!("iio-{}", self.device.kind.name()))
            .spawn(move || Self::poll(key, device, period, origin, events, flag));

        match spawned {
            Ok(_) => self.running = Some(running),
            Err(e) => {
                tracing::error!("Failed to spawn polling thread: {}", e);
                let fault = SensorFault::new("NotReadableError", e.to_string());
                let _ = self.events.send(PlatformEvent::error(self.key, fault));
            }
        }
    }

    fn stop(&mut self) {
        if let Some(running) = self.running.take() {
            running.store(false, Ordering::Release);
        }
    }

    fn is_running(&self) -> bool {
        self.running
            .as_ref()
            .is_some_and(|running| running.load(Ordering::Acquire))
    }
}

impl Drop for IioSubscription {
    fn drop(&mut self) {
        self.stop();
    }
}

fn scan_devices(root: &Path) -> Vec<IioDevice> {
    let entries = match std::fs::read_dir(root) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::debug!("No IIO devices at {}: {}", root.display(), e);
            return Vec::new();
        }
    };

    let mut dirs: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .filter(|entry| entry.file_name().to_string_lossy().starts_with("iio:device"))
        .map(|entry| entry.path())
        .collect();
    dirs.sort();

    dirs.iter().flat_map(|dir| IioDevice::probe(dir)).collect()
}

/// `<prefix>_raw` with its scale and offset.
fn scalar_channel(dir: &Path, prefix: &str) -> Option<Channel> {
    let path = dir.join(format!("{}_raw", prefix));
    if !path.exists() {
        return None;
    }
    Some(Channel {
        path,
        scale: first_f64(&[dir.join(format!("{}_scale", prefix))], 1.0),
        offset: first_f64(&[dir.join(format!("{}_offset", prefix))], 0.0),
    })
}

/// `<prefix>_{x,y,z}_raw`, each with a per-axis or shared scale and offset.
fn triple_channel(dir: &Path, prefix: &str) -> Option<[Channel; 3]> {
    let axis = |name: &str| -> Option<Channel> {
        let path = dir.join(format!("{}_{}_raw", prefix, name));
        if !path.exists() {
            return None;
        }
        Some(Channel {
            path,
            scale: first_f64(
                &[
                    dir.join(format!("{}_{}_scale", prefix, name)),
                    dir.join(format!("{}_scale", prefix)),
                ],
                1.0,
            ),
            offset: first_f64(
                &[
                    dir.join(format!("{}_{}_offset", prefix, name)),
                    dir.join(format!("{}_offset", prefix)),
                ],
                0.0,
            ),
        })
    };

    Some([axis("x")?, axis("y")?, axis("z")?])
}

/// Value of the first readable file in `paths`, else `default`.
fn first_f64(paths: &[PathBuf], default: f64) -> f64 {
    paths
        .iter()
        .find_map(|path| read_f64(path).ok())
        .unwrap_or(default)
}

fn read_f64(path: &Path) -> io::Result<f64> {
    let text = std::fs::read_to_string(path)?;
    text.trim()
        .parse::<f64>()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}
