//! The shared record-marshalling protocol
//!
//! Every entity type follows the same wire discipline: a group-code-0
//! introducer, a run of code/value pairs, and the next group-code-0 pair as
//! terminator. This module implements that protocol once; each record type
//! contributes only its dispatch table (`apply_code`) and its canonical
//! field order (`write_fields`).

use super::common::{EntityCommon, DEFAULT_LAYER, DEFAULT_LINETYPE};
use crate::error::{DxfError, Result};
use crate::io::dxf::reader::{DxfCodePair, DxfStreamReader};
use crate::io::dxf::writer::{DxfStreamWriter, DxfStreamWriterExt};
use crate::notification::{NotificationCollection, NotificationType};
use crate::types::{DxfVersion, Vector3};

/// Shared state for a decode or encode pass: the target format version, the
/// legacy flatland compatibility flag, and the diagnostic side channel.
#[derive(Debug, Default)]
pub struct CodecContext {
    /// Format revision all version gates compare against
    pub version: DxfVersion,
    /// Pre-R13 flatland compatibility (enables the legacy elevation group)
    pub flatland: bool,
    /// Non-fatal diagnostics collected during the pass
    pub notifications: NotificationCollection,
}

impl CodecContext {
    /// Create a context for the given format version
    pub fn new(version: DxfVersion) -> Self {
        Self {
            version,
            flatland: false,
            notifications: NotificationCollection::new(),
        }
    }

    /// Enable the pre-R13 flatland compatibility flag
    pub fn with_flatland(mut self, flatland: bool) -> Self {
        self.flatland = flatland;
        self
    }
}

/// One marshalled entity record type.
///
/// Implementations are flat value objects owning their strings and
/// sub-record sequences; the shared protocol in this module drives them.
pub trait DxfEntity {
    /// The introducer value (group 0), e.g. `"SOLID"`
    fn record_type(&self) -> &'static str;

    /// The type-specific subclass marker written after the common groups;
    /// empty for marker records that carry no subclass of their own
    fn subclass_marker(&self) -> &'static str;

    /// All group-100 labels this record accepts without a diagnostic
    fn subclass_markers(&self) -> &'static [&'static str];

    /// Shared presentation attributes
    fn common(&self) -> &EntityCommon;

    /// Shared presentation attributes, mutable
    fn common_mut(&mut self) -> &mut EntityCommon;

    /// Apply one type-specific group. Returns `Ok(false)` for codes the
    /// record does not know, which the protocol reports and skips.
    fn apply_code(&mut self, pair: &DxfCodePair, ctx: &mut CodecContext) -> Result<bool>;

    /// Emit the type-specific groups in canonical order
    fn write_fields(&self, writer: &mut dyn DxfStreamWriter, version: DxfVersion) -> Result<()>;
}

/// Decode a record from the stream into a freshly default-initialized value.
///
/// The caller has already consumed the introducer pair. Decoding stops at
/// the next group-code-0 pair, which is pushed back, never consumed.
pub fn read_entity<E: DxfEntity + Default>(
    reader: &mut dyn DxfStreamReader,
    ctx: &mut CodecContext,
) -> Result<E> {
    let mut entity = E::default();
    read_entity_into(reader, ctx, &mut entity)?;
    Ok(entity)
}

/// Decode a record from the stream into an existing value.
pub fn read_entity_into<E: DxfEntity + ?Sized>(
    reader: &mut dyn DxfStreamReader,
    ctx: &mut CodecContext,
    entity: &mut E,
) -> Result<()> {
    loop {
        let pair = match reader.read_pair()? {
            Some(pair) => pair,
            None => break,
        };

        if pair.code == 0 {
            // Terminator: the next record's introducer. Leave it in the
            // stream for the caller.
            reader.push_back(pair);
            break;
        }

        if pair.code == 100 {
            if ctx.version.has_subclass_markers()
                && !entity
                    .subclass_markers()
                    .iter()
                    .any(|marker| *marker == pair.value_string)
            {
                ctx.notifications.notify(
                    NotificationType::Warning,
                    format!(
                        "{}: unexpected subclass marker '{}' at line {}",
                        entity.record_type(),
                        pair.value_string,
                        pair.line
                    ),
                );
                tracing::warn!(
                    record = entity.record_type(),
                    marker = %pair.value_string,
                    "unexpected subclass marker"
                );
            }
            continue;
        }

        if pair.code == 102 {
            read_control_group(reader, ctx, entity.common_mut(), &pair)?;
            continue;
        }

        if entity.common_mut().apply_code(&pair, ctx)? {
            continue;
        }
        if entity.apply_code(&pair, ctx)? {
            continue;
        }

        ctx.notifications.notify(
            NotificationType::Warning,
            format!(
                "{}: unknown group code {} at line {}",
                entity.record_type(),
                pair.code,
                pair.line
            ),
        );
        tracing::warn!(
            record = entity.record_type(),
            code = pair.code,
            line = pair.line,
            "unknown group code"
        );
    }

    entity.common_mut().normalize_names();
    Ok(())
}

/// Consume a `102 {NAME ... 102 }` control group. Reactor and dictionary
/// brackets feed the owner back-references; anything else is
/// application-defined and skipped.
fn read_control_group(
    reader: &mut dyn DxfStreamReader,
    ctx: &mut CodecContext,
    common: &mut EntityCommon,
    opening: &DxfCodePair,
) -> Result<()> {
    let name = opening.value_string.clone();
    if !name.starts_with('{') {
        ctx.notifications.notify(
            NotificationType::Warning,
            format!(
                "unmatched control group '{}' at line {}",
                name, opening.line
            ),
        );
        return Ok(());
    }

    loop {
        let pair = match reader.read_pair()? {
            Some(pair) => pair,
            None => {
                return Err(DxfError::Parse(format!(
                    "unterminated control group '{}' opened at line {}",
                    name, opening.line
                )))
            }
        };
        match pair.code {
            102 => break,
            0 => {
                // Record ended inside the bracket. Recoverable, but worth a
                // diagnostic.
                ctx.notifications.notify(
                    NotificationType::Error,
                    format!(
                        "control group '{}' not closed before end of record (line {})",
                        name, pair.line
                    ),
                );
                reader.push_back(pair);
                break;
            }
            330 if name == "{ACAD_REACTORS" => common.owner_soft = pair.value_string.clone(),
            360 if name == "{ACAD_XDICTIONARY" => common.owner_hard = pair.value_string.clone(),
            _ => {}
        }
    }
    Ok(())
}

/// Encode a record: introducer, common groups, subclass marker, the type's
/// fields, and the extrusion direction.
///
/// Takes the record mutably: an empty required name is repaired in place to
/// its default before anything is written.
pub fn write_entity<E: DxfEntity + ?Sized>(
    writer: &mut dyn DxfStreamWriter,
    ctx: &mut CodecContext,
    entity: &mut E,
) -> Result<()> {
    {
        let record_type = entity.record_type();
        let common = entity.common_mut();
        if common.linetype.is_empty() {
            common.linetype = DEFAULT_LINETYPE.to_string();
            ctx.notifications.notify(
                NotificationType::Warning,
                format!(
                    "{}: empty linetype repaired to default before write",
                    record_type
                ),
            );
        }
        if common.layer.is_empty() {
            common.layer = DEFAULT_LAYER.to_string();
            ctx.notifications.notify(
                NotificationType::Warning,
                format!(
                    "{}: empty layer repaired to default before write",
                    record_type
                ),
            );
        }
    }

    writer.write_record_type(entity.record_type())?;
    entity
        .common()
        .write_groups(writer, ctx.version, ctx.flatland)?;
    if ctx.version.has_subclass_markers() && !entity.subclass_marker().is_empty() {
        writer.write_subclass(entity.subclass_marker())?;
    }
    entity.write_fields(writer, ctx.version)?;
    if entity.common().extrusion != Vector3::UNIT_Z {
        writer.write_point3d(210, entity.common().extrusion)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::dxf::reader::DxfTextReader;
    use crate::io::dxf::writer::DxfTextWriter;
    use std::io::Cursor;

    /// Minimal record used to exercise the protocol in isolation.
    #[derive(Debug, Default)]
    struct Probe {
        common: EntityCommon,
        value: f64,
    }

    impl DxfEntity for Probe {
        fn record_type(&self) -> &'static str {
            "PROBE"
        }
        fn subclass_marker(&self) -> &'static str {
            "AcDbProbe"
        }
        fn subclass_markers(&self) -> &'static [&'static str] {
            &["AcDbEntity", "AcDbProbe"]
        }
        fn common(&self) -> &EntityCommon {
            &self.common
        }
        fn common_mut(&mut self) -> &mut EntityCommon {
            &mut self.common
        }
        fn apply_code(&mut self, pair: &DxfCodePair, _ctx: &mut CodecContext) -> Result<bool> {
            match pair.code {
                40 => self.value = pair.expect_double()?,
                _ => return Ok(false),
            }
            Ok(true)
        }
        fn write_fields(
            &self,
            writer: &mut dyn DxfStreamWriter,
            _version: DxfVersion,
        ) -> Result<()> {
            writer.write_double(40, self.value)
        }
    }

    fn reader_for(data: &str) -> DxfTextReader<Cursor<Vec<u8>>> {
        DxfTextReader::from_reader(Cursor::new(data.as_bytes().to_vec()))
    }

    #[test]
    fn test_decode_stops_at_terminator_without_consuming() {
        let mut reader = reader_for("40\n1.5\n0\nSEQEND\n");
        let mut ctx = CodecContext::new(DxfVersion::AC1032);
        let probe: Probe = read_entity(&mut reader, &mut ctx).unwrap();
        assert_eq!(probe.value, 1.5);

        let next = reader.read_pair().unwrap().unwrap();
        assert_eq!(next.code, 0);
        assert_eq!(next.value_string, "SEQEND");
    }

    #[test]
    fn test_unknown_code_is_nonfatal() {
        let mut reader = reader_for("1071\n12345\n40\n2.0\n0\nEOF\n");
        let mut ctx = CodecContext::new(DxfVersion::AC1032);
        let probe: Probe = read_entity(&mut reader, &mut ctx).unwrap();
        assert_eq!(probe.value, 2.0);
        assert_eq!(ctx.notifications.len(), 1);
        assert!(ctx.notifications.has_type(NotificationType::Warning));
    }

    #[test]
    fn test_malformed_value_aborts_with_location() {
        let mut reader = reader_for("40\nnot-a-number\n0\nEOF\n");
        let mut ctx = CodecContext::new(DxfVersion::AC1032);
        let result: Result<Probe> = read_entity(&mut reader, &mut ctx);
        match result {
            Err(DxfError::MalformedValue { code: 40, line: 2 }) => {}
            other => panic!("expected MalformedValue at line 2, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_names_are_normalized() {
        // Layer present and empty, linetype absent entirely.
        let mut reader = reader_for("8\n\n40\n1.0\n0\nEOF\n");
        let mut ctx = CodecContext::new(DxfVersion::AC1032);
        let probe: Probe = read_entity(&mut reader, &mut ctx).unwrap();
        assert_eq!(probe.common.layer, DEFAULT_LAYER);
        assert_eq!(probe.common.linetype, DEFAULT_LINETYPE);
    }

    #[test]
    fn test_reactor_bracket_feeds_soft_owner() {
        let data = "102\n{ACAD_REACTORS\n330\nDEAD\n102\n}\n40\n1.0\n0\nEOF\n";
        let mut reader = reader_for(data);
        let mut ctx = CodecContext::new(DxfVersion::AC1032);
        let probe: Probe = read_entity(&mut reader, &mut ctx).unwrap();
        assert_eq!(probe.common.owner_soft, "DEAD");
        assert!(ctx.notifications.is_empty());
    }

    #[test]
    fn test_subclass_mismatch_warns_but_succeeds() {
        let mut reader = reader_for("100\nAcDbWrong\n40\n1.0\n0\nEOF\n");
        let mut ctx = CodecContext::new(DxfVersion::AC1032);
        let probe: Probe = read_entity(&mut reader, &mut ctx).unwrap();
        assert_eq!(probe.value, 1.0);
        assert!(ctx.notifications.has_type(NotificationType::Warning));
    }

    #[test]
    fn test_subclass_not_validated_before_r13() {
        let mut reader = reader_for("100\nAcDbWrong\n0\nEOF\n");
        let mut ctx = CodecContext::new(DxfVersion::AC1009);
        let _probe: Probe = read_entity(&mut reader, &mut ctx).unwrap();
        assert!(ctx.notifications.is_empty());
    }

    #[test]
    fn test_elevation_gated_on_version_and_flatland() {
        let data = "38\n4.5\n0\nEOF\n";

        let mut ctx = CodecContext::new(DxfVersion::AC1009).with_flatland(true);
        let probe: Probe = read_entity(&mut reader_for(data), &mut ctx).unwrap();
        assert_eq!(probe.common.elevation, 4.5);

        let mut ctx = CodecContext::new(DxfVersion::AC1032).with_flatland(true);
        let probe: Probe = read_entity(&mut reader_for(data), &mut ctx).unwrap();
        assert_eq!(probe.common.elevation, 0.0);

        let mut ctx = CodecContext::new(DxfVersion::AC1009);
        let probe: Probe = read_entity(&mut reader_for(data), &mut ctx).unwrap();
        assert_eq!(probe.common.elevation, 0.0);
    }

    #[test]
    fn test_write_repairs_empty_names_in_place() {
        let mut probe = Probe::default();
        probe.common.linetype.clear();
        probe.common.layer.clear();

        let mut buf = Vec::new();
        let mut ctx = CodecContext::new(DxfVersion::AC1032);
        {
            let mut writer = DxfTextWriter::new(&mut buf);
            write_entity(&mut writer, &mut ctx, &mut probe).unwrap();
        }

        assert_eq!(probe.common.linetype, DEFAULT_LINETYPE);
        assert_eq!(probe.common.layer, DEFAULT_LAYER);
        assert_eq!(ctx.notifications.len(), 2);

        let output = String::from_utf8(buf).unwrap();
        assert!(output.contains("  8\n0\n"));
    }

    #[test]
    fn test_write_omits_null_handle_and_emits_hex() {
        let mut ctx = CodecContext::new(DxfVersion::AC1032);

        let mut probe = Probe::default();
        let mut buf = Vec::new();
        {
            let mut writer = DxfTextWriter::new(&mut buf);
            write_entity(&mut writer, &mut ctx, &mut probe).unwrap();
        }
        let output = String::from_utf8(buf).unwrap();
        assert!(!output.contains("  5\n"));

        probe.common.handle = crate::types::Handle::new(0x2A);
        let mut buf = Vec::new();
        {
            let mut writer = DxfTextWriter::new(&mut buf);
            write_entity(&mut writer, &mut ctx, &mut probe).unwrap();
        }
        let output = String::from_utf8(buf).unwrap();
        assert!(output.contains("  5\n2A\n"));
    }

    #[test]
    fn test_graphics_data_chunks_roundtrip_in_order() {
        let mut probe = Probe::default();
        probe.common.graphics_data_size = 6;
        probe.common.push_graphics_data("AABB");
        probe.common.push_graphics_data("CCDD");
        probe.common.push_graphics_data("EEFF");

        let mut buf = Vec::new();
        let mut ctx = CodecContext::new(DxfVersion::AC1032);
        {
            let mut writer = DxfTextWriter::new(&mut buf);
            write_entity(&mut writer, &mut ctx, &mut probe).unwrap();
        }

        let text = String::from_utf8(buf).unwrap();
        // Strip the introducer pair; read_entity expects it consumed.
        let body = text.split_once('\n').map(|(_, rest)| rest).unwrap();
        let body = body.split_once('\n').map(|(_, rest)| rest).unwrap();
        let mut reader = reader_for(&format!("{}0\nEOF\n", body));
        let decoded: Probe = read_entity(&mut reader, &mut ctx).unwrap();
        assert_eq!(decoded.common.graphics_data, vec!["AABB", "CCDD", "EEFF"]);
        assert_eq!(decoded.common.graphics_data_size, 6);
    }
}
