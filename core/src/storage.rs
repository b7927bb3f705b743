use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;
use serde_json::Value;

use crate::models::Waypoint;

/// Enkel navngitt nøkkel/verdi-lagring på disk (én JSON-fil) – samme skjema
/// som appens UserDefaults. Kartskjermen skriver markørene hit, grafskjermen
/// leser dem tilbake. Manglende nøkler leses som 0 / tom liste, aldri feil.
pub struct MarkerStore {
    path: PathBuf,
    values: BTreeMap<String, Value>,
}

impl MarkerStore {
    /// Åpner lageret fra disk. Finnes ikke filen, starter vi tomt.
    pub fn open(path: &str) -> Result<Self> {
        let values = if Path::new(path).exists() {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("kunne ikke lese marker-lager fra {path}"))?;
            let values: BTreeMap<String, Value> = serde_json::from_str(&contents)
                .with_context(|| format!("ugyldig marker-lager i {path}"))?;
            println!("📂 Marker-lager lastet fra {} ({} nøkler)", path, values.len());
            values
        } else {
            println!("⚠️ Fant ikke marker-lager på {path}, starter tomt");
            BTreeMap::new()
        };

        Ok(Self {
            path: PathBuf::from(path),
            values,
        })
    }

    fn flush(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.values)?;
        std::fs::write(&self.path, json)
            .with_context(|| format!("kunne ikke skrive marker-lager til {}", self.path.display()))?;
        Ok(())
    }

    // UserDefaults-semantikk: manglende eller feiltypet nøkkel leses som 0.
    fn get_f64(&self, key: &str) -> f64 {
        self.values.get(key).and_then(Value::as_f64).unwrap_or(0.0)
    }

    fn get_count(&self, key: &str) -> usize {
        self.values
            .get(key)
            .and_then(Value::as_u64)
            .unwrap_or(0) as usize
    }

    fn set_f64(&mut self, key: String, v: f64) {
        self.values.insert(key, Value::from(v));
    }

    /// Skriver gjeldende markører: `markerCount` + `marker{i}_lat`/`marker{i}_long`.
    /// Antallet som lagres er det faktiske antallet.
    pub fn save_markers(&mut self, markers: &[Waypoint]) -> Result<()> {
        self.values
            .insert("markerCount".into(), Value::from(markers.len()));
        for (i, m) in markers.iter().enumerate() {
            self.set_f64(format!("marker{i}_lat"), m.latitude);
            self.set_f64(format!("marker{i}_long"), m.longitude);
        }
        self.flush()?;
        println!("✅ {} markører lagret til {}", markers.len(), self.path.display());
        Ok(())
    }

    /// Leser gjeldende markører tilbake i samme rekkefølge.
    pub fn load_markers(&self) -> Vec<Waypoint> {
        let count = self.get_count("markerCount");
        (0..count)
            .map(|i| {
                Waypoint::new(
                    self.get_f64(&format!("marker{i}_lat")),
                    self.get_f64(&format!("marker{i}_long")),
                )
            })
            .collect()
    }

    /// Lagrer en navngitt sti: `{name}_count` + `{name}_{i}_lat`/`{name}_{i}_long`,
    /// pluss `{name}_saved_at` (RFC 3339).
    pub fn save_path(&mut self, name: &str, markers: &[Waypoint]) -> Result<()> {
        self.values
            .insert(format!("{name}_count"), Value::from(markers.len()));
        for (i, m) in markers.iter().enumerate() {
            self.set_f64(format!("{name}_{i}_lat"), m.latitude);
            self.set_f64(format!("{name}_{i}_long"), m.longitude);
        }
        self.values.insert(
            format!("{name}_saved_at"),
            Value::from(Utc::now().to_rfc3339()),
        );
        self.flush()?;
        println!("✅ Sti '{}' lagret ({} markører)", name, markers.len());
        Ok(())
    }

    /// Leser en navngitt sti; ukjent navn gir tom liste.
    pub fn load_path(&self, name: &str) -> Vec<Waypoint> {
        let count = self.get_count(&format!("{name}_count"));
        if let Some(saved_at) = self
            .values
            .get(&format!("{name}_saved_at"))
            .and_then(Value::as_str)
        {
            println!("📂 Sti '{name}' ({count} markører, lagret {saved_at})");
        }
        (0..count)
            .map(|i| {
                Waypoint::new(
                    self.get_f64(&format!("{name}_{i}_lat")),
                    self.get_f64(&format!("{name}_{i}_long")),
                )
            })
            .collect()
    }
}
