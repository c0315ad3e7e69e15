use std::io::Write;

use byteorder::{LittleEndian, WriteBytesExt};

use crate::ResourceError;
use crate::common::types::C3Vector;

pub(crate) trait Writable {
    fn write<W: Write>(&self, wtr: &mut W) -> Result<(), ResourceError>;
}

impl Writable for C3Vector {
    fn write<W: Write>(&self, wtr: &mut W) -> Result<(), ResourceError> {
        wtr.write_f32::<LittleEndian>(self.x)?;
        wtr.write_f32::<LittleEndian>(self.y)?;
        wtr.write_f32::<LittleEndian>(self.z)?;
        Ok(())
    }
}

impl Writable for u32 {
    fn write<W: Write>(&self, wtr: &mut W) -> Result<(), ResourceError> {
        Ok(wtr.write_u32::<LittleEndian>(*self)?)
    }
}

impl Writable for f32 {
    fn write<W: Write>(&self, wtr: &mut W) -> Result<(), ResourceError> {
        Ok(wtr.write_f32::<LittleEndian>(*self)?)
    }
}
