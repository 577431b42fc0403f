use std::fs::{self, File};
use std::io::{self, Error, ErrorKind, Read, Write};
use std::path::Path;

use log::{error, info};

use crate::bytestream::bytereader::ByteReader;
use crate::bytestream::bytewriter::ByteWriter;
use crate::pipeline::encode::SUFFIX;
use crate::tools::cli::{BwOpts, Output};
use crate::transform::bwt::bwt_decode;
use crate::transform::mtf::mtf_decode;

const EOF_MESSAGE: &str = "unexpected end of stream";

/// Decode one block from `source` onto `sink`, exactly reversing run_encode.
/// All validation happens before the first output byte is committed; a
/// malformed record produces no output at all.
pub fn run_decode<R: Read, W: Write>(source: R, sink: W) -> io::Result<()> {
    let mut reader = ByteReader::new(source);
    let mut writer = ByteWriter::new(sink);

    // An exhausted source is the degenerate empty block.
    if !reader.has_more() {
        return writer.finish();
    }

    let first = reader
        .u32_be()
        .ok_or_else(|| Error::new(ErrorKind::UnexpectedEof, EOF_MESSAGE))?;
    let mtf = reader.block();
    if mtf.is_empty() {
        // A valid record always carries at least one transform byte after
        // the row header.
        error!("Found a transform row but no transform data.");
        return Err(Error::new(ErrorKind::UnexpectedEof, EOF_MESSAGE));
    }

    let bwt = mtf_decode(&mtf);
    let block = bwt_decode(first, &bwt)?;

    writer.out_slice(&block);
    writer.finish()
}

/// Decompress the input named in opts (BwOpts). File output requires the
/// input name to carry the preprocessor suffix, which is stripped.
pub fn decompress(opts: &BwOpts) -> io::Result<()> {
    let fname = match &opts.file {
        None => return run_decode(io::stdin(), io::stdout()),
        Some(fname) => fname,
    };
    let fin = File::open(fname)?;

    match opts.output {
        Output::Stdout => run_decode(fin, io::stdout())?,
        Output::File => {
            let out_name = match fname.strip_suffix(SUFFIX) {
                Some(stem) => stem.to_string(),
                None => {
                    error!("Can't tell where to put the output: {} does not end in {}.", fname, SUFFIX);
                    return Err(Error::new(ErrorKind::InvalidInput, "unrecognized suffix"));
                }
            };
            if !opts.force_overwrite && Path::new(&out_name).exists() {
                error!("Output file {} exists. Use --force to overwrite.", out_name);
                return Err(Error::new(ErrorKind::AlreadyExists, "output file exists"));
            }
            run_decode(fin, File::create(&out_name)?)?;
            info!("Wrote {}.", out_name);

            if !opts.keep_input_files {
                fs::remove_file(fname)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::{run_decode, EOF_MESSAGE};
    use crate::pipeline::encode::run_encode;
    use std::io::ErrorKind;

    #[test]
    fn wire_format_test() {
        let wire = [0_u8, 0, 0, 0, 66, 66];
        let mut out = Vec::new();
        run_decode(wire.as_slice(), &mut out).unwrap();
        assert_eq!(out, b"AB".to_vec());
    }

    #[test]
    fn empty_stream_test() {
        let mut out = Vec::new();
        run_decode([].as_slice(), &mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn truncated_header_test() {
        // Three bytes cannot hold the row number.
        let mut out = Vec::new();
        let err = run_decode([0_u8, 0, 0].as_slice(), &mut out).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnexpectedEof);
        assert_eq!(err.to_string(), EOF_MESSAGE);
        assert!(out.is_empty());
    }

    #[test]
    fn header_without_data_test() {
        let mut out = Vec::new();
        let err = run_decode([0_u8, 0, 0, 0].as_slice(), &mut out).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnexpectedEof);
        assert!(out.is_empty());
    }

    #[test]
    fn bad_row_rejected_test() {
        // Row 5 in a two byte record. Nothing may be written.
        let mut out = Vec::new();
        let err = run_decode([0_u8, 0, 0, 5, 66, 66].as_slice(), &mut out).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert!(out.is_empty());
    }

    #[test]
    fn roundtrip_test() {
        let block = b"she sells sea shells by the sea shore".to_vec();
        let mut wire = Vec::new();
        run_encode(block.as_slice(), &mut wire).unwrap();
        let mut out = Vec::new();
        run_decode(wire.as_slice(), &mut out).unwrap();
        assert_eq!(out, block);
    }
}
