//! Built-in bingo themes.
//!
//! Each theme carries a static pool of workplace phrases, large enough to fill
//! a card without placeholders. They are used whenever no generated phrase
//! list is available.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::IntoEnumIterator;

/// A bingo theme.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Everyday office life.
    #[default]
    Oficina,
    /// Working from home.
    Teletrabajo,
    /// Meetings that could have been an email.
    Reuniones,
    /// Pay and conditions.
    Salario,
}

const OFICINA: &[&str] = &[
    "La impresora no funciona",
    "Alguien calienta pescado",
    "El aire acondicionado a tope",
    "Correo a las 23:00",
    "Nos falta personal",
    "Eso no es mi departamento",
    "Horas extra sin pagar",
    "Cambio de turno sin aviso",
    "La silla rota otra vez",
    "Nuevo software sin formación",
    "Comida en el escritorio",
    "El jefe llega tarde",
    "Mañana sin café",
    "Vacaciones denegadas",
    "Te toca cubrir a un compañero",
    "Reorganización sorpresa",
    "Objetivos imposibles",
    "Baño fuera de servicio",
];

const TELETRABAJO: &[&str] = &[
    "Estás en silencio",
    "Se congela la pantalla",
    "El perro ladra en la llamada",
    "Wifi inestable",
    "Cámara obligatoria",
    "Mensaje en domingo",
    "La luz la pago yo",
    "Silla de cocina",
    "Reunión a la hora de comer",
    "¿Me oís?",
    "Control de conexión",
    "Portátil de 2012",
    "Niños de fondo",
    "Sin desconexión digital",
    "Comparte pantalla equivocada",
    "Estado ausente a las 9:01",
    "VPN caída",
];

const REUNIONES: &[&str] = &[
    "Esto podía ser un correo",
    "Empezamos cinco minutos tarde",
    "Sinergias",
    "Lo vemos offline",
    "Nadie tiene la agenda",
    "Reunión para preparar la reunión",
    "Alineamiento estratégico",
    "Se habla de presupuesto y no hay",
    "Nuevas prioridades",
    "Acta que nadie lee",
    "Ponemos otra reunión",
    "Hay que remar todos juntos",
    "Somos una familia",
    "Quick win",
    "Feedback constructivo",
    "Se pasa de la hora",
    "Preguntas al final que no da tiempo",
];

const SALARIO: &[&str] = &[
    "Congelación salarial",
    "El IPC sube, el sueldo no",
    "Bonus por objetivos inalcanzables",
    "Pagamos en visibilidad",
    "Categoría mal asignada",
    "Nómina con errores",
    "Pluses que desaparecen",
    "Subida del 0,5%",
    "Este año no toca",
    "Trabajo de dos por uno",
    "Becario haciendo de senior",
    "Contrato temporal eterno",
    "Sin revisión anual",
    "Brecha salarial",
    "Dietas sin actualizar",
    "Horario flexible solo para ellos",
    "Tickets restaurante de 2008",
];

impl Theme {
    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Oficina => "Oficina",
            Self::Teletrabajo => "Teletrabajo",
            Self::Reuniones => "Reuniones",
            Self::Salario => "Salario",
        }
    }

    /// The theme's phrase pool.
    pub fn phrases(self) -> &'static [&'static str] {
        match self {
            Self::Oficina => OFICINA,
            Self::Teletrabajo => TELETRABAJO,
            Self::Reuniones => REUNIONES,
            Self::Salario => SALARIO,
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Error parsing a theme name.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Unknown theme: {input}")]
pub struct ThemeParseError {
    /// The rejected input.
    pub input: String,
}

impl FromStr for Theme {
    type Err = ThemeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::iter()
            .find(|theme| theme.label().to_lowercase() == wanted)
            .ok_or_else(|| ThemeParseError {
                input: s.to_string(),
            })
    }
}
