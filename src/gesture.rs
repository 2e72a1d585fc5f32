// src/gesture.rs
//
// Pellizco → escala de render. La escala se aplica sólo como transformación
// (tamaño de texto del cuerpo de la pregunta); el ancho del layout no cambia.

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct ScaleBounds {
    pub lower_bound: f32,
    /// Tope opcional de crecimiento.
    #[serde(default)]
    pub upper_bound: Option<f32>,
}

impl Default for ScaleBounds {
    fn default() -> Self {
        Self {
            lower_bound: 1.0,
            upper_bound: None,
        }
    }
}

impl ScaleBounds {
    pub fn apply(&self, raw: f32) -> f32 {
        let scale = clamp_scale(raw, self.lower_bound);
        match self.upper_bound {
            Some(upper) => scale.min(upper),
            None => scale,
        }
    }
}

/// `max(raw, lower_bound)`; valores no finitos cuentan como 1.0.
pub fn clamp_scale(raw: f32, lower_bound: f32) -> f32 {
    let raw = if raw.is_finite() { raw } else { 1.0 };
    raw.max(lower_bound)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GesturePhase {
    #[default]
    Idle,
    Active,
}

/// Escala mostrada por una vista de pregunta.
///
/// Al terminar el gesto la escala NO vuelve a 1.0: se queda el último valor
/// hasta el siguiente gesto o un `reset()` explícito.
#[derive(Debug, Clone, PartialEq)]
pub struct GestureScale {
    bounds: ScaleBounds,
    phase: GesturePhase,
    displayed: f32,
}

impl GestureScale {
    pub fn new(bounds: ScaleBounds) -> Self {
        Self {
            bounds,
            phase: GesturePhase::Idle,
            displayed: 1.0,
        }
    }

    pub fn begin(&mut self) {
        self.phase = GesturePhase::Active;
    }

    /// `raw` es relativo al inicio del gesto (1.0 = sin cambio).
    pub fn update(&mut self, raw: f32) -> f32 {
        if self.phase == GesturePhase::Active {
            self.displayed = self.bounds.apply(raw);
        }
        self.displayed
    }

    pub fn end(&mut self) {
        self.phase = GesturePhase::Idle;
    }

    pub fn reset(&mut self) {
        self.phase = GesturePhase::Idle;
        self.displayed = 1.0;
    }

    pub fn apply(&mut self, event: GestureEvent) -> f32 {
        match event {
            GestureEvent::Started => self.begin(),
            GestureEvent::Updated(raw) => {
                self.update(raw);
            }
            GestureEvent::Ended => self.end(),
        }
        self.displayed
    }

    pub fn displayed(&self) -> f32 {
        self.displayed
    }

    pub fn phase(&self) -> GesturePhase {
        self.phase
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    Started,
    Updated(f32),
    Ended,
}

/// Rango del producto acumulado; evita que un gesto largo llegue a `inf`.
pub const MIN_RAW_SCALE: f32 = 1.0e-4;
pub const MAX_RAW_SCALE: f32 = 1.0e4;

/// Convierte los deltas por frame de egui (multiplicativos) en la escala
/// acumulada desde el inicio del gesto.
#[derive(Debug, Clone, Default)]
pub struct PinchRecognizer {
    cumulative: Option<f32>,
}

impl PinchRecognizer {
    /// `zoom_delta` es `None` cuando no hay pellizco en este frame.
    pub fn observe(&mut self, zoom_delta: Option<f32>) -> Vec<GestureEvent> {
        match (self.cumulative, zoom_delta) {
            (None, None) => vec![],
            (None, Some(delta)) => {
                let raw = sanitize(delta).clamp(MIN_RAW_SCALE, MAX_RAW_SCALE);
                self.cumulative = Some(raw);
                vec![GestureEvent::Started, GestureEvent::Updated(raw)]
            }
            (Some(acc), Some(delta)) => {
                let raw = (acc * sanitize(delta)).clamp(MIN_RAW_SCALE, MAX_RAW_SCALE);
                self.cumulative = Some(raw);
                vec![GestureEvent::Updated(raw)]
            }
            (Some(_), None) => {
                self.cumulative = None;
                vec![GestureEvent::Ended]
            }
        }
    }

    pub fn is_tracking(&self) -> bool {
        self.cumulative.is_some()
    }
}

fn sanitize(delta: f32) -> f32 {
    if delta.is_finite() && delta > 0.0 { delta } else { 1.0 }
}
