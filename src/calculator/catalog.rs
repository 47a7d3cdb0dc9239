//! Supported operation catalog
//!
//! A process-wide constant list exposed for discovery. Declaration order is
//! significant and grouped by arithmetic family, symbol aliases adjacent.

use serde::Serialize;

/// A single catalog entry describing a supported operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OperationDescriptor {
    pub symbol: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

const OPERATIONS: [OperationDescriptor; 6] = [
    OperationDescriptor {
        symbol: "+",
        name: "addition",
        description: "Add two numbers",
    },
    OperationDescriptor {
        symbol: "-",
        name: "subtraction",
        description: "Subtract second number from first",
    },
    OperationDescriptor {
        symbol: "*",
        name: "multiplication",
        description: "Multiply two numbers",
    },
    OperationDescriptor {
        symbol: "×",
        name: "multiplication",
        description: "Multiply two numbers (alternative symbol)",
    },
    OperationDescriptor {
        symbol: "/",
        name: "division",
        description: "Divide first number by second",
    },
    OperationDescriptor {
        symbol: "÷",
        name: "division",
        description: "Divide first number by second (alternative symbol)",
    },
];

/// The fixed six-entry catalog.
pub fn operations() -> &'static [OperationDescriptor] {
    &OPERATIONS
}
