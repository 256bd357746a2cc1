use std::fs::File;
use std::io::BufWriter;

use anyhow::{anyhow, Context};
use tracing_subscriber::EnvFilter;

use midk_stationconv::{ConvertOptions, Converter};

fn usage(exe: &str) {
	eprintln!("Usage: {} INPUTFILE(.syx) OUTPUTFILE(.syx) [--keep-going] [--strict]", exe);
	eprintln!("[Note] Supported only *.syx files, SMF(*.mid) is not supported.");
}

fn run() -> anyhow::Result<bool> {
	let args = aarg::parse().map_err(|e| anyhow!("bad arguments: {:?}", e))?;
	let options = ConvertOptions {
		keep_going: args.get("--keep-going").is_some(),
		strict: args.get("--strict").is_some(),
	};
	let (exe, input_path, output_path) = match args.get("") {
		Some(pos) if pos.len() >= 3 => (&pos[0], &pos[1], &pos[2]),
		pos => {
			let exe = pos
				.and_then(|p| p.first())
				.map(|x| x.as_str())
				.unwrap_or("a2vstation");
			usage(exe);
			return Ok(false);
		}
	};
	tracing::debug!("{} {} -> {} {:?}", exe, input_path, output_path, options);

	let input = File::open(input_path)
		.with_context(|| format!("File open error ({})", input_path))?;
	let output = File::create(output_path)
		.with_context(|| format!("File open error ({})", output_path))?;

	let summary = Converter::new(options)
		.convert(input, BufWriter::new(output), |notice| {
			println!("[INFO] {}", notice);
		})
		.map_err(|e| match e {
			midk_stationconv::Error::NotSysex { .. } => {
				anyhow!("{} is not *.syx file", input_path)
			}
			e => e.into(),
		})?;
	for rejected in summary.rejected.iter() {
		eprintln!("[ERR] message {}: {}", rejected.index, rejected.error);
	}
	tracing::debug!(
		"converted {}, rejected {}, discarded {} bytes",
		summary.converted,
		summary.rejected.len(),
		summary.discarded_bytes,
	);
	Ok(summary.rejected.is_empty())
}

fn main() {
	tracing_subscriber::fmt()
		.with_env_filter(
			EnvFilter::try_from_default_env()
				.unwrap_or_else(|_| EnvFilter::new("warn")),
		)
		.with_writer(std::io::stderr)
		.init();
	match run() {
		Ok(true) => {}
		Ok(false) => std::process::exit(1),
		Err(e) => {
			eprintln!("[ERR] {:#}", e);
			std::process::exit(1);
		}
	}
}
