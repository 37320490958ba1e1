//! Simulation statistics collection and reporting.
//!
//! This module tracks performance metrics for a core. It provides:
//! 1. **Cycle and IPC:** Total cycles, retired instructions, and derived metrics (CPI, IPC).
//! 2. **Stalls:** Data hazard stall cycles.
//! 3. **Control Flow:** Taken branches and fetch redirects.
//! 4. **Decode:** Instructions rejected as unsupported.

use std::fmt::Write as _;

/// Simulation statistics structure tracking all performance metrics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SimStats {
    /// Total simulator cycles elapsed (committed cycles, including stalls).
    pub cycles: u64,
    /// Number of instructions retired.
    pub instructions_retired: u64,

    /// Stall cycles due to data hazards (RAW dependencies).
    pub stalls_data: u64,
    /// Fetch redirects caused by jumps and taken branches.
    pub flushes_control: u64,
    /// Conditional branches resolved as taken.
    pub branches_taken: u64,
    /// Instructions replaced by a bubble because decode rejected them.
    pub unsupported: u64,
}

/// Section names for selective stats output.
///
/// Valid section identifiers: `"summary"`, `"pipeline"`.
/// Pass an empty slice to `print_sections` to print all sections.
pub const STATS_SECTIONS: &[&str] = &["summary", "pipeline"];

impl SimStats {
    /// Cycles per instruction. The denominator is clamped to 1.
    pub fn cpi(&self) -> f64 {
        self.cycles as f64 / self.instructions_retired.max(1) as f64
    }

    /// Instructions per cycle. The denominator is clamped to 1.
    pub fn ipc(&self) -> f64 {
        self.instructions_retired as f64 / self.cycles.max(1) as f64
    }

    /// Formats the performance-metrics section for one core.
    ///
    /// # Arguments
    ///
    /// * `title` - Core name, e.g. `"Single Stage"` or `"Five Stage"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rv5s_core::stats::SimStats;
    ///
    /// let stats = SimStats { cycles: 10, instructions_retired: 5, ..Default::default() };
    /// let text = stats.metrics_report("Five Stage");
    /// assert!(text.contains("CPI -> 2.000000"));
    /// ```
    pub fn metrics_report(&self, title: &str) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Performance of {title}:");
        let _ = writeln!(out, "#Cycles -> {}", self.cycles);
        let _ = writeln!(out, "#Instructions -> {}", self.instructions_retired);
        let _ = writeln!(out, "CPI -> {:.6}", self.cpi());
        let _ = writeln!(out, "IPC -> {:.6}", self.ipc());
        out
    }

    /// Prints only the requested statistics sections to stdout.
    ///
    /// Each element of `sections` should be one of `"summary"` or `"pipeline"`.
    /// Pass an empty slice to print all sections. Unknown names are ignored.
    pub fn print_sections(&self, title: &str, sections: &[&str]) {
        let want = |s: &str| sections.is_empty() || sections.contains(&s);

        println!("==========================================================");
        println!("{title:^58}");
        println!("==========================================================");

        if want("summary") {
            println!("  cycles                   {:>12}", self.cycles);
            println!("  instructions retired     {:>12}", self.instructions_retired);
            println!("  CPI                      {:>12.4}", self.cpi());
            println!("  IPC                      {:>12.4}", self.ipc());
        }

        if want("pipeline") {
            let pct = |n: u64| n as f64 * 100.0 / self.cycles.max(1) as f64;
            println!("  ----------------------------------------------------");
            println!(
                "  data stalls              {:>12} ({:>5.1}% of cycles)",
                self.stalls_data,
                pct(self.stalls_data)
            );
            println!("  control redirects        {:>12}", self.flushes_control);
            println!("  branches taken           {:>12}", self.branches_taken);
            println!("  unsupported (bubbled)    {:>12}", self.unsupported);
        }
    }

    /// Prints every statistics section to stdout.
    pub fn print(&self, title: &str) {
        self.print_sections(title, &[]);
    }
}
