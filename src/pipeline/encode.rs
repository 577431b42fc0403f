use std::fs::{self, File};
use std::io::{self, Error, ErrorKind, Read, Write};
use std::path::Path;

use log::{debug, error, info};

use crate::bytestream::bytereader::ByteReader;
use crate::bytestream::bytewriter::ByteWriter;
use crate::tools::cli::{BwOpts, Output};
use crate::transform::bwt::bwt_encode;
use crate::transform::mtf::mtf_encode;

/// Suffix appended to preprocessed files.
pub const SUFFIX: &str = ".bwp";

/// Encode one block from `source` onto `sink`: a four byte big-endian row
/// number, then the Move-To-Front coded transform column. An exhausted source
/// writes nothing at all. Every buffered byte reaches the sink before return.
pub fn run_encode<R: Read, W: Write>(source: R, sink: W) -> io::Result<()> {
    let mut reader = ByteReader::new(source);
    let mut writer = ByteWriter::new(sink);

    let block = reader.block();
    if block.is_empty() {
        // A degenerate block has no transform row to record.
        return writer.finish();
    }

    let (first, bwt) = bwt_encode(&block);
    let mtf = mtf_encode(&bwt);
    debug!("Row {} heads the {} byte transform.", first, block.len());

    writer.out32(first);
    writer.out_slice(&mtf);
    writer.finish()
}

/// Compress the input named in opts (BwOpts), honoring the keep, force and
/// stdout options. A missing file name pipes stdin to stdout.
pub fn compress(opts: &BwOpts) -> io::Result<()> {
    let fname = match &opts.file {
        None => return run_encode(io::stdin(), io::stdout()),
        Some(fname) => fname,
    };
    let fin = File::open(fname)?;

    match opts.output {
        Output::Stdout => run_encode(fin, io::stdout())?,
        Output::File => {
            let mut out_name = fname.clone();
            out_name.push_str(SUFFIX);
            if !opts.force_overwrite && Path::new(&out_name).exists() {
                error!("Output file {} exists. Use --force to overwrite.", out_name);
                return Err(Error::new(ErrorKind::AlreadyExists, "output file exists"));
            }
            run_encode(fin, File::create(&out_name)?)?;
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
    use super::run_encode;

    #[test]
    fn wire_format_test() {
        // "AB" transforms to row 0 with column "BA"; under MTF both bytes
        // cost rank 66.
        let mut wire = Vec::new();
        run_encode("AB".as_bytes(), &mut wire).unwrap();
        assert_eq!(wire, vec![0, 0, 0, 0, 66, 66]);
    }

    #[test]
    fn empty_input_test() {
        // No block, no row header.
        let mut wire = Vec::new();
        run_encode([].as_slice(), &mut wire).unwrap();
        assert!(wire.is_empty());
    }

    #[test]
    fn single_byte_test() {
        let mut wire = Vec::new();
        run_encode("Z".as_bytes(), &mut wire).unwrap();
        assert_eq!(wire, vec![0, 0, 0, 0, b'Z']);
    }
}
