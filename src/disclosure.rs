// src/disclosure.rs

/// Qué pistas y si el bloque de código están desplegados en una vista de pregunta.
///
/// Es un valor: cada toggle devuelve un estado nuevo y deja el anterior intacto.
/// Se crea cerrado al abrir la pregunta y se descarta al salir.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DisclosureState {
    hints: Vec<bool>,
    code: bool,
}

impl DisclosureState {
    pub fn new(hint_count: usize) -> Self {
        Self {
            hints: vec![false; hint_count],
            code: false,
        }
    }

    /// Invierte la pista `index`. Índices fuera de rango se ignoran.
    #[must_use]
    pub fn toggled_hint(&self, index: usize) -> Self {
        let mut next = self.clone();
        if let Some(visible) = next.hints.get_mut(index) {
            *visible = !*visible;
        }
        next
    }

    #[must_use]
    pub fn toggled_code(&self) -> Self {
        Self {
            hints: self.hints.clone(),
            code: !self.code,
        }
    }

    pub fn is_hint_visible(&self, index: usize) -> bool {
        self.hints.get(index).copied().unwrap_or(false)
    }

    pub fn is_code_visible(&self) -> bool {
        self.code
    }

    pub fn hint_count(&self) -> usize {
        self.hints.len()
    }

    pub fn visible_hint_count(&self) -> usize {
        self.hints.iter().filter(|v| **v).count()
    }
}
