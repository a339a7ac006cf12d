pub mod module_gate;
