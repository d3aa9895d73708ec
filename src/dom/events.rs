// ============================================================================
// EVENT HANDLING - Nombres de eventos tipados y registro de listeners
// ============================================================================
// GESTIÓN DE MEMORIA:
// - Los listeners se registran con addEventListener y nunca se quitan desde acá.
// - El closure se entrega a JS con forget(); el navegador lo libera junto con
//   el elemento cuando este deja de estar referenciado.
// ============================================================================

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use wasm_bindgen::closure::Closure;
use js_sys::Function;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget};
use crate::error::DomError;

/// Callback de evento
pub type Listener = Box<dyn FnMut(Event)>;

/// Nombre de evento DOM; `Custom` para cualquier otro
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EventName {
    Click,
    DoubleClick,
    MouseDown,
    MouseUp,
    MouseEnter,
    MouseLeave,
    MouseMove,
    KeyDown,
    KeyUp,
    Input,
    Change,
    Submit,
    Focus,
    Blur,
    Load,
    Error,
    Scroll,
    TouchStart,
    TouchMove,
    TouchEnd,
    DragStart,
    DragOver,
    Drop,
    DragEnd,
    Custom(String),
}

static KNOWN_EVENTS: &[(EventName, &str)] = &[
    (EventName::Click, "click"),
    (EventName::DoubleClick, "dblclick"),
    (EventName::MouseDown, "mousedown"),
    (EventName::MouseUp, "mouseup"),
    (EventName::MouseEnter, "mouseenter"),
    (EventName::MouseLeave, "mouseleave"),
    (EventName::MouseMove, "mousemove"),
    (EventName::KeyDown, "keydown"),
    (EventName::KeyUp, "keyup"),
    (EventName::Input, "input"),
    (EventName::Change, "change"),
    (EventName::Submit, "submit"),
    (EventName::Focus, "focus"),
    (EventName::Blur, "blur"),
    (EventName::Load, "load"),
    (EventName::Error, "error"),
    (EventName::Scroll, "scroll"),
    (EventName::TouchStart, "touchstart"),
    (EventName::TouchMove, "touchmove"),
    (EventName::TouchEnd, "touchend"),
    (EventName::DragStart, "dragstart"),
    (EventName::DragOver, "dragover"),
    (EventName::Drop, "drop"),
    (EventName::DragEnd, "dragend"),
];

impl EventName {
    /// Nombre tal como lo espera addEventListener
    pub fn as_str(&self) -> &str {
        if let Self::Custom(name) = self {
            return name;
        }
        KNOWN_EVENTS
            .iter()
            .find(|(event, _)| event == self)
            .map_or("", |(_, name)| *name)
    }
}

impl FromStr for EventName {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(KNOWN_EVENTS
            .iter()
            .find(|(_, name)| *name == s)
            .map_or_else(|| Self::Custom(s.to_string()), |(event, _)| event.clone()))
    }
}

impl From<&str> for EventName {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(event) => event,
            Err(never) => match never {},
        }
    }
}

impl fmt::Display for EventName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Handler registrado: closure Rust o función JS tal cual
enum Handler {
    Rust(Listener),
    /// Se registra directo con addEventListener: `this` es el elemento y las
    /// excepciones llegan al canal de errores del navegador
    Js(Function),
}

/// Mapa evento -> callback
#[derive(Default)]
pub struct Listeners(HashMap<EventName, Handler>);

impl Listeners {
    pub fn new() -> Self {
        Self::default()
    }

    /// Agregar listener (estilo builder); reemplaza uno previo del mismo evento
    pub fn on<F>(mut self, event: impl Into<EventName>, handler: F) -> Self
    where
        F: FnMut(Event) + 'static,
    {
        self.insert(event, handler);
        self
    }

    pub fn insert<F>(&mut self, event: impl Into<EventName>, handler: F)
    where
        F: FnMut(Event) + 'static,
    {
        self.0.insert(event.into(), Handler::Rust(Box::new(handler)));
    }

    /// Agregar una función JS; se registra sin envolver
    pub fn insert_js(&mut self, event: impl Into<EventName>, function: Function) {
        self.0.insert(event.into(), Handler::Js(function));
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, event: &EventName) -> bool {
        self.0.contains_key(event)
    }

    /// Registrar todos los listeners en `target`, consumiendo el mapa
    pub fn attach(self, target: &EventTarget) -> Result<(), DomError> {
        for (event, handler) in self.0 {
            match handler {
                Handler::Rust(handler) => attach_listener(target, &event, handler)?,
                Handler::Js(function) => {
                    target.add_event_listener_with_callback(event.as_str(), &function)?
                }
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.0.keys()).finish()
    }
}

/// Registrar un listener con addEventListener (sin deduplicar)
pub fn attach_listener(target: &EventTarget, event: &EventName, handler: Listener) -> Result<(), DomError> {
    let closure = Closure::wrap(handler);
    target.add_event_listener_with_callback(event.as_str(), closure.as_ref().unchecked_ref())?;
    // Nota: forget() mantiene vivo el closure del lado de JS
    closure.forget();
    Ok(())
}

/// Helper para registrar un handler simple
pub fn on<F>(target: &EventTarget, event: impl Into<EventName>, handler: F) -> Result<(), DomError>
where
    F: FnMut(Event) + 'static,
{
    attach_listener(target, &event.into(), Box::new(handler))
}
