//! SQLite sinks for edgelists and neighborhood statistics. Gated behind
//! the `sqlite` feature; the core library has no dependency on this
//! module.

use rusqlite::{params, Connection};

use crate::edgelist::{EdgeList, VertexId};
use crate::error::Result;
use crate::search::Dbv;

/// Writes every edge in `edges` into `table_name` (created if absent),
/// inside a single transaction.
pub fn save_edgelist(conn: &Connection, table_name: &str, edges: &EdgeList) -> Result<()> {
	conn.execute(
		&format!(
			"CREATE TABLE IF NOT EXISTS {} (SRC INT NOT NULL, DST INT NOT NULL, WEIGHT REAL NOT NULL)",
			table_name
		),
		[],
	)?;
	let tx = conn.unchecked_transaction()?;
	{
		let mut stmt = tx.prepare(&format!("INSERT INTO {} (SRC, DST, WEIGHT) VALUES (?1, ?2, ?3)", table_name))?;
		for e in edges.all_edges() {
			stmt.execute(params![e.src, e.dest, e.weight])?;
		}
	}
	tx.commit()?;
	Ok(())
}

/// Reloads a table written by [`save_edgelist`] into a fresh, directed
/// `EdgeList`; used for round-trip verification.
pub fn load_edgelist(conn: &Connection, table_name: &str) -> Result<EdgeList> {
	let mut edges = EdgeList::new(true);
	let mut stmt = conn.prepare(&format!("SELECT SRC, DST, WEIGHT FROM {}", table_name))?;
	let mut rows = stmt.query([])?;
	while let Some(row) = rows.next()? {
		let src: VertexId = row.get(0)?;
		let dest: VertexId = row.get(1)?;
		let weight: f64 = row.get(2)?;
		edges.insert_edge(src, dest, weight);
	}
	Ok(edges)
}

/// Writes a `dbv` (all-pairs distance map) into `table_name`.
pub fn save_dbv(conn: &Connection, table_name: &str, dbv: &Dbv) -> Result<()> {
	conn.execute(
		&format!(
			"CREATE TABLE IF NOT EXISTS {} (SRC INT NOT NULL, DST INT NOT NULL, INFO_DIST REAL NOT NULL, NET_DIST INT NOT NULL)",
			table_name
		),
		[],
	)?;
	let tx = conn.unchecked_transaction()?;
	{
		let mut stmt = tx.prepare(&format!(
			"INSERT INTO {} (SRC, DST, INFO_DIST, NET_DIST) VALUES (?1, ?2, ?3, ?4)",
			table_name
		))?;
		for (&src, dtv) in dbv {
			for (&dest, pair) in dtv {
				stmt.execute(params![src, dest, pair.info_distance, pair.net_distance])?;
			}
		}
	}
	tx.commit()?;
	Ok(())
}

/// Records one `S_avg(gamma)` result for a network under `net_id`.
pub fn save_s_average(conn: &Connection, net_id: &str, gamma: f64, avg_s: f64) -> Result<()> {
	conn.execute(
		"CREATE TABLE IF NOT EXISTS S_average (NET_ID TEXT, GAMMA REAL, avg_s REAL)",
		[],
	)?;
	conn.execute(
		"INSERT INTO S_average (NET_ID, GAMMA, avg_s) VALUES (?1, ?2, ?3)",
		params![net_id, gamma, avg_s],
	)?;
	Ok(())
}

/// Records one `L_neighborhood_reduction_rate_average(L)` result for a
/// network under `net_id`.
pub fn save_l_neighborhood_reduction_average(conn: &Connection, net_id: &str, l: i64, avg_lnr: f64) -> Result<()> {
	conn.execute(
		"CREATE TABLE IF NOT EXISTS L_neighborhood_reduction_average (NET_ID TEXT, L INT, avg_lnr REAL)",
		[],
	)?;
	conn.execute(
		"INSERT INTO L_neighborhood_reduction_average (NET_ID, L, avg_lnr) VALUES (?1, ?2, ?3)",
		params![net_id, l, avg_lnr],
	)?;
	Ok(())
}
