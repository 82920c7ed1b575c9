//! Reporting, and reading and writing signals and curves as text or binary.

use std::fmt;
use std::io::{Read, Write};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::curve::ParametricCurve;
use crate::error::Result;
use crate::signal::SampledSignal;

/// An object which can describe itself and be stored as text or binary.
///
/// The text format is JSON and the binary format is bincode. Reading goes
/// through the same validation as construction, so an object read back from
/// either format upholds the same invariants as one built directly.
pub trait Persist: Serialize + DeserializeOwned {
    /// A human-readable summary of the object.
    fn describe(&self) -> String;

    /// Writes the object as pretty-printed JSON.
    fn write_text(&self, writer: impl Write) -> Result<()> {
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Reads an object written by [Persist::write_text].
    fn read_text(reader: impl Read) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Writes the object in the bincode binary format.
    fn write_binary(&self, writer: impl Write) -> Result<()> {
        bincode::serialize_into(writer, self)?;
        Ok(())
    }

    /// Reads an object written by [Persist::write_binary].
    fn read_binary(reader: impl Read) -> Result<Self> {
        Ok(bincode::deserialize_from(reader)?)
    }
}

/// The sampling and value summary of one signal, indented under a heading.
struct Summary<'a> {
    name: &'a str,
    signal: &'a SampledSignal,
}

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Summary { name, signal } = self;
        let values = signal.extrema();
        writeln!(f, "{name} sampling:")?;
        writeln!(f, "   Number of values of t in {name}: {}", signal.len())?;
        writeln!(f, "   t step in {name}: {} (sampling rate {})", signal.step(), signal.rate())?;
        writeln!(f, "   First t in {name}: {}", signal.start())?;
        writeln!(f, "   Last t in {name}: {}", signal.end())?;
        writeln!(f, "{name} values:")?;
        writeln!(f, "   Minimum {name}: {}", values.min)?;
        write!(f, "   Maximum {name}: {}", values.max)
    }
}

impl Persist for SampledSignal {
    fn describe(&self) -> String {
        Summary {
            name: "signal",
            signal: self,
        }
        .to_string()
    }
}

impl Persist for ParametricCurve {
    fn describe(&self) -> String {
        let domain = self.domain();
        let x = Summary {
            name: "x",
            signal: self.x(),
        };
        let y = Summary {
            name: "y",
            signal: self.y(),
        };
        format!(
            "Domain:\n   tmin: {}\n   tmax: {}\n{x}\n{y}",
            domain.min, domain.max
        )
    }
}
