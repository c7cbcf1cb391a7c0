#![allow(dead_code)]

use std::{
  fs,
  io::Read,
  path::{Path, PathBuf},
};

use assert_cmd::{Command, cargo::cargo_bin_cmd};
use flate2::read::GzDecoder;
use tempfile::TempDir;

/// Raw table with an unnamed index column, shuffled dates, a quoted note and
/// a second-phase round.
pub const RAW_TABLE: &str = "\
,Date,Season,home,visitor,FT,hgoal,vgoal,tier,round,group,notes,HT
1,1929-02-17,1928,Real Madrid,Barcelona,1-2,1,2,1,league,,,0-1
2,1929-02-10,1928,Athletic,Real Madrid,2-1,2,1,1,league,,,1-1
3,1929-02-10,1928,Barcelona,Espanyol,0-0,0,0,1,league,,,0-0
4,1929-02-24,1928,Espanyol,Athletic,3-3,3,3,1,phase2,,\"replayed, abandoned\",1-2
5,1929-09-01,1929,Athletic,Sevilla,0-1,0,1,1,league,,,0-0
";

pub const CLEAN_TABLE: &str = "\
Date,Season,home,visitor,score,hgoal,vgoal,hpoint,vpoint
1929-02-10,1928,Athletic,Real Madrid,2-1,2,1,3,0
1929-02-10,1928,Barcelona,Espanyol,0-0,0,0,1,1
1929-02-17,1928,Real Madrid,Barcelona,1-2,1,2,0,3
1929-02-24,1928,Espanyol,Athletic,3-3,3,3,1,1
1929-09-01,1929,Athletic,Sevilla,0-1,0,1,0,3
";

pub const STANDINGS_TABLE: &str = "\
Season,Team,Points,GS,GA,GD,Wins,Losses,Ties
1928,Athletic,4,5,4,1,1,0,1
1928,Barcelona,4,2,1,1,1,0,1
1928,Espanyol,2,3,3,0,0,0,2
1928,Real Madrid,0,2,4,-2,0,2,0
1929,Sevilla,3,1,0,1,1,0,0
1929,Athletic,0,0,1,-1,0,1,0
";

/// A scratch directory for one test.
pub struct Workspace {
  dir: TempDir,
}

impl Workspace {
  pub fn new() -> Self {
    Self {
      dir: TempDir::new().expect("create temp dir"),
    }
  }

  pub fn path(&self, name: &str) -> PathBuf { self.dir.path().join(name) }

  pub fn write(&self, name: &str, contents: &str) -> PathBuf {
    let path = self.path(name);
    fs::write(&path, contents).expect("write fixture");
    path
  }
}

pub fn clean_cmd() -> Command { cargo_bin_cmd!("clean") }

pub fn standings_cmd() -> Command { cargo_bin_cmd!("standings") }

pub fn read_text(path: &Path) -> String {
  fs::read_to_string(path).expect("read output")
}

pub fn gunzip(path: &Path) -> Vec<u8> {
  let mut out = Vec::new();
  GzDecoder::new(fs::File::open(path).expect("open gzip output"))
    .read_to_end(&mut out)
    .expect("valid gzip");
  out
}
