//! Workspace-level integration tests for fibengine live under `tests/`.
