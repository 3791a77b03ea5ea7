//! Network-locality engine CLI: derives the negative Laplacian and g-tilde
//! transform of a weighted graph, then reports bounded geodesic distances
//! and neighborhood statistics over it.

use clap::{crate_version, App, Arg, ArgMatches, SubCommand};

mod cross;
mod edgelist;
mod error;
#[cfg(test)]
mod fixtures;
mod gtilde;
mod io;
mod laplacian;
mod neighborhood;
mod scalar;
mod search;

use edgelist::EdgeList;
use error::Result;
use scalar::ScalarTable;
use search::{Dbv, Dtv};

fn action_subcommands<'a, 'b>(app: App<'a, 'b>) -> App<'a, 'b> {
	app.subcommand(
		SubCommand::with_name("convert_g_tilda")
			.about("Write the g-tilde transform of the input graph to a plaintext edgelist file")
			.arg(Arg::with_name("path").required(true).index(1).help("Output file path")),
	)
	.subcommand(
		SubCommand::with_name("dtv_k")
			.about("k-bounded geodesic distances from a single source")
			.arg(Arg::with_name("src").required(true).index(1))
			.arg(Arg::with_name("k").required(true).index(2)),
	)
	.subcommand(
		SubCommand::with_name("dtv_tau")
			.about("tau-bounded geodesic distances from a single source")
			.arg(Arg::with_name("src").required(true).index(1))
			.arg(Arg::with_name("tau").required(true).index(2)),
	)
	.subcommand(
		SubCommand::with_name("dbv_k")
			.about("k-bounded geodesic distances from every source")
			.arg(Arg::with_name("k").required(true).index(1)),
	)
	.subcommand(
		SubCommand::with_name("dbv_tau")
			.about("tau-bounded geodesic distances from every source")
			.arg(Arg::with_name("tau").required(true).index(1)),
	)
	.subcommand(
		SubCommand::with_name("s_avg")
			.about("mean gamma-neighborhood cardinality")
			.arg(Arg::with_name("gamma").required(true).index(1)),
	)
}

fn main() {
	env_logger::init_from_env(env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, "info"));

	let matches = App::new("netloc-geodesics")
		.version(crate_version!())
		.about("Information-theoretic neighborhood analysis of weighted graphs")
		.subcommand(action_subcommands(
			SubCommand::with_name("gen_watts_strogatz")
				.about("Generate a Watts-Strogatz small-world network as input")
				.arg(Arg::with_name("size").required(true).index(1))
				.arg(Arg::with_name("avg_deg").required(true).index(2))
				.arg(Arg::with_name("rewiring_prob").required(true).index(3)),
		))
		.subcommand(action_subcommands(
			SubCommand::with_name("load_file")
				.about("Load an input graph from a plaintext edgelist file")
				.arg(Arg::with_name("path").required(true).index(1))
				.arg(Arg::with_name("weighted").required(true).index(2).help("0 or 1"))
				.arg(Arg::with_name("directed").required(true).index(3).help("0 or 1")),
		))
		.get_matches();

	if let Err(e) = run(&matches) {
		log::error!("{}", e);
		std::process::exit(1);
	}
}

fn run(matches: &ArgMatches) -> Result<()> {
	let (graph, action_matches) = match matches.subcommand() {
		("gen_watts_strogatz", Some(sub)) => {
			let size = parse_arg(sub, "size");
			let avg_deg = parse_arg(sub, "avg_deg");
			let rewiring_prob = parse_arg(sub, "rewiring_prob");
			log::info!("generating a Watts-Strogatz network (size={}, avg_deg={}, rewiring_prob={})", size, avg_deg, rewiring_prob);
			(io::watts_strogatz::generate(size, avg_deg, rewiring_prob), sub)
		}
		("load_file", Some(sub)) => {
			let path = sub.value_of("path").expect("required arg");
			let weighted: i64 = parse_arg(sub, "weighted");
			let directed: i64 = parse_arg(sub, "directed");
			log::info!("loading edgelist from {}", path);
			let mut graph = io::ingest::edgelist_from_file(weighted != 0, path)?;
			graph.set_directional(directed != 0);
			(graph, sub)
		}
		_ => {
			eprintln!("expected a source subcommand: gen_watts_strogatz or load_file");
			std::process::exit(1);
		}
	};

	match action_matches.subcommand() {
		("convert_g_tilda", Some(sub)) => {
			let path = sub.value_of("path").expect("required arg");
			let g = to_g_tilde(&graph)?;
			io::ingest::write_edgelist_to_file(&g, path)?;
			log::info!("wrote g-tilde edgelist to {}", path);
		}
		("dtv_k", Some(sub)) => {
			let src = parse_arg(sub, "src");
			let k = parse_arg(sub, "k");
			print_dtv(&search::geodesic_distance_k(&graph, src, k));
		}
		("dtv_tau", Some(sub)) => {
			let src = parse_arg(sub, "src");
			let tau = parse_arg(sub, "tau");
			print_dtv(&search::geodesic_distance_tau(&graph, src, tau));
		}
		("dbv_k", Some(sub)) => {
			let k = parse_arg(sub, "k");
			print_dbv(&cross::cross_geodesic_distance_k(&graph, k));
		}
		("dbv_tau", Some(sub)) => {
			let tau = parse_arg(sub, "tau");
			print_dbv(&cross::cross_geodesic_distance_tau(&graph, tau));
		}
		("s_avg", Some(sub)) => {
			let gamma: f64 = parse_arg(sub, "gamma");
			let l = laplacian::take_neg_laplacian(&graph);
			let table = ScalarTable::new();
			let g = gtilde::neg_laplacian_to_g(&l, &table)?;
			let avg = neighborhood::s_avg_gamma(&l, &g, &table, gamma)?;
			println!("S_avg= {}", avg);
		}
		_ => {
			eprintln!("expected an action subcommand: convert_g_tilda, dtv_k, dtv_tau, dbv_k, dbv_tau, or s_avg");
			std::process::exit(1);
		}
	}

	Ok(())
}

fn to_g_tilde(a: &EdgeList) -> Result<EdgeList> {
	let l = laplacian::take_neg_laplacian(a);
	let table = ScalarTable::new();
	gtilde::neg_laplacian_to_g(&l, &table)
}

/// Parses a required, already-validated-by-clap argument. Exits with a
/// usage error (matching the original CLI's `exit(1)` on a malformed
/// numeric argument) rather than threading a parse failure through
/// `NetError`, since this is a CLI boundary concern, not a core one.
fn parse_arg<T: std::str::FromStr>(matches: &ArgMatches, name: &str) -> T {
	let raw = matches.value_of(name).expect("required arg");
	raw.parse().unwrap_or_else(|_| {
		eprintln!("ERROR: invalid value for {}: {:?}", name, raw);
		std::process::exit(1);
	})
}

fn print_dtv(dtv: &Dtv) {
	for (dest, pair) in dtv {
		println!("-> {} = INFO:{} | NET:{}", dest, pair.info_distance, pair.net_distance);
	}
}

fn print_dbv(dbv: &Dbv) {
	for (src, dtv) in dbv {
		for (dest, pair) in dtv {
			println!("{} -> {} = INFO:{} | NET:{}", src, dest, pair.info_distance, pair.net_distance);
		}
	}
}
