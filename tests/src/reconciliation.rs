mod integration;
mod policy;
