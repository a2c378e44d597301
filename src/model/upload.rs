/// One of the four compliance photos required before MSF can continue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UploadField {
    /// Foto kondisi segel.
    Segel,
    /// Surat Izin Bongkar.
    Sib,
    /// Fuel Transfer Worksheet.
    Ftw,
    /// Pemeriksaan 2 Harian.
    P2h,
}

impl UploadField {
    /// All fields in display order.
    pub const ALL: [UploadField; 4] = [Self::Segel, Self::Sib, Self::Ftw, Self::P2h];

    /// Short label used in the validation checklist.
    pub fn short_label(self) -> &'static str {
        match self {
            Self::Segel => "Foto Segel",
            Self::Sib => "Foto SIB",
            Self::Ftw => "Foto FTW",
            Self::P2h => "Foto P2H",
        }
    }

    /// Card title shown above the upload slot.
    pub fn title(self) -> &'static str {
        match self {
            Self::Segel => "Foto Kondisi Segel",
            Self::Sib => "Foto SIB (Surat Izin Bongkar)",
            Self::Ftw => "Foto FTW (Fuel Transfer Worksheet)",
            Self::P2h => "Foto P2H (Pemeriksaan 2 Harian)",
        }
    }
}

/// Presence flags for the four compliance photos.
///
/// No file content is tracked; a flag only records that a file was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UploadState {
    pub segel: bool,
    pub sib: bool,
    pub ftw: bool,
    pub p2h: bool,
}

impl UploadState {
    /// Returns a copy with `field` marked as uploaded.
    #[must_use]
    pub fn with_uploaded(self, field: UploadField) -> Self {
        match field {
            UploadField::Segel => Self { segel: true, ..self },
            UploadField::Sib => Self { sib: true, ..self },
            UploadField::Ftw => Self { ftw: true, ..self },
            UploadField::P2h => Self { p2h: true, ..self },
        }
    }

    /// Returns whether `field` has been uploaded.
    pub fn is_uploaded(&self, field: UploadField) -> bool {
        match field {
            UploadField::Segel => self.segel,
            UploadField::Sib => self.sib,
            UploadField::Ftw => self.ftw,
            UploadField::P2h => self.p2h,
        }
    }

    /// Returns `true` when all four photos are present.
    pub fn all_uploaded(&self) -> bool {
        UploadField::ALL.iter().all(|&f| self.is_uploaded(f))
    }
}
