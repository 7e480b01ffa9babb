mod excerpts;
mod references;
mod tiers;
mod validation;
