/// MCP server implementation that handles JSON-RPC communication
///
/// This module implements the actual MCP server that:
/// 1. Reads one JSON-RPC message per line
/// 2. Runs tool calls against the session's habit tracker
/// 3. Writes one JSON-RPC response per line
///
/// Each message is handled to completion before the next line is read.

use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde_json::{json, Map, Value};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, error, info, warn};

use crate::mcp::protocol::*;
use crate::session::Session;
use crate::tools::{self, ToolError};
use crate::{HabitTrackerServer, ServerError};

/// MCP server bound to one client session
pub struct McpServer {
    /// The underlying habit tracker server
    habit_tracker: HabitTrackerServer,
    /// Whether the client has sent its initialized notification
    initialized: bool,
}

impl McpServer {
    /// Create a new MCP server
    pub fn new(habit_tracker: HabitTrackerServer) -> Self {
        Self {
            habit_tracker,
            initialized: false,
        }
    }

    pub fn habit_tracker(&self) -> &HabitTrackerServer {
        &self.habit_tracker
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Serve requests from `reader` until it reaches end of input
    pub async fn serve<R, W>(&mut self, mut reader: R, mut writer: W) -> Result<(), ServerError>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        info!("Starting MCP server, waiting for JSON-RPC requests...");

        let mut line = String::new();

        loop {
            line.clear();

            match reader.read_line(&mut line).await {
                Ok(0) => {
                    info!("MCP server shutting down (input closed)");
                    break;
                }
                Ok(_) => {
                    if let Some(response) = self.process_line(&line) {
                        let response_str = serde_json::to_string(&response)?;

                        writer.write_all(response_str.as_bytes()).await?;
                        writer.write_all(b"\n").await?;
                        writer.flush().await?;

                        debug!("Sent response: {}", response_str);
                    }
                }
                Err(e) => {
                    error!("Failed to read request: {}", e);
                    return Err(e.into());
                }
            }
        }

        Ok(())
    }

    /// Process a single line of JSON-RPC input
    ///
    /// Returns `None` for blank lines and notifications.
    pub fn process_line(&mut self, line: &str) -> Option<JsonRpcResponse> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        debug!("Processing request: {}", line);

        let message: Value = match serde_json::from_str(line) {
            Ok(value) => value,
            Err(e) => {
                error!("Failed to parse JSON-RPC message: {}", e);
                return Some(JsonRpcResponse::error(
                    json!(null),
                    error_codes::PARSE_ERROR,
                    format!("Invalid JSON: {}", e),
                    None,
                ));
            }
        };

        // Well-formed JSON that is not a request object
        let request_id = message.get("id").cloned().unwrap_or(Value::Null);
        let request: JsonRpcRequest = match serde_json::from_value(message) {
            Ok(req) => req,
            Err(e) => {
                error!("Invalid JSON-RPC request: {}", e);
                return Some(JsonRpcResponse::error(
                    request_id,
                    error_codes::INVALID_REQUEST,
                    format!("Invalid request: {}", e),
                    None,
                ));
            }
        };

        let session_id = self.habit_tracker.session().id();
        let _span = tracing::debug_span!("request", session = %session_id, method = %request.method)
            .entered();

        match request.id.clone() {
            Some(id) => Some(self.handle_request(id, request)),
            None => {
                self.handle_notification(&request);
                None
            }
        }
    }

    /// Handle a message that expects no reply
    fn handle_notification(&mut self, request: &JsonRpcRequest) {
        match request.method.as_str() {
            "notifications/initialized" | "initialized" => {
                self.initialized = true;
                info!("MCP client initialized");
            }
            other => debug!("Ignoring notification '{}'", other),
        }
    }

    /// Handle a JSON-RPC request
    fn handle_request(&mut self, id: Value, request: JsonRpcRequest) -> JsonRpcResponse {
        if request.jsonrpc != JSONRPC_VERSION {
            return JsonRpcResponse::error(
                id,
                error_codes::INVALID_REQUEST,
                format!("Unsupported JSON-RPC version '{}'", request.jsonrpc),
                None,
            );
        }

        match request.method.as_str() {
            "initialize" => self.handle_initialize(id),
            "notifications/initialized" | "initialized" => {
                self.initialized = true;
                JsonRpcResponse::success(id, json!(null))
            }
            "ping" => JsonRpcResponse::success(id, json!({})),
            "tools/list" => self.handle_tools_list(id),
            "tools/call" => self.handle_tools_call(id, request.params),
            _ => JsonRpcResponse::error(
                id,
                error_codes::METHOD_NOT_FOUND,
                format!("Method '{}' not found", request.method),
                None,
            ),
        }
    }

    /// Handle MCP initialization request
    fn handle_initialize(&mut self, id: Value) -> JsonRpcResponse {
        info!("MCP client connected");

        let result = InitializeResult {
            protocol_version: MCP_VERSION.to_string(),
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability {
                    list_changed: false,
                }),
            },
            server_info: ServerInfo {
                name: "Habit Tracker".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        };

        JsonRpcResponse::from_serializable(id, &result)
    }

    /// Handle tools/list request
    fn handle_tools_list(&mut self, id: Value) -> JsonRpcResponse {
        let tools = vec![
            ToolDefinition {
                name: "habit_add".to_string(),
                description: "Start tracking a new habit".to_string(),
                input_schema: input_schema::<tools::AddHabitParams>(),
            },
            ToolDefinition {
                name: "habit_remove".to_string(),
                description: "Stop tracking a habit and discard its history".to_string(),
                input_schema: input_schema::<tools::RemoveHabitParams>(),
            },
            ToolDefinition {
                name: "habit_check".to_string(),
                description: "Mark a habit done or not done for today or a specific date".to_string(),
                input_schema: input_schema::<tools::CheckHabitParams>(),
            },
            ToolDefinition {
                name: "habit_list".to_string(),
                description: "List all habits and whether each was done on a day".to_string(),
                input_schema: input_schema::<tools::ListHabitsParams>(),
            },
            ToolDefinition {
                name: "habit_summary".to_string(),
                description: "Show total habits, completions on a day, and total completions per habit".to_string(),
                input_schema: input_schema::<tools::SummaryParams>(),
            },
        ];

        JsonRpcResponse::from_serializable(id, &json!({"tools": tools}))
    }

    /// Handle tools/call request
    fn handle_tools_call(&mut self, id: Value, params: Option<Value>) -> JsonRpcResponse {
        let tool_params: ToolCallParams = match params {
            Some(params) => match serde_json::from_value(params) {
                Ok(p) => p,
                Err(e) => {
                    return JsonRpcResponse::error(
                        id,
                        error_codes::INVALID_PARAMS,
                        format!("Invalid parameters: {}", e),
                        None,
                    );
                }
            },
            None => {
                return JsonRpcResponse::error(
                    id,
                    error_codes::INVALID_PARAMS,
                    "Missing parameters".to_string(),
                    None,
                );
            }
        };

        let args = tool_params.arguments;
        let result = match tool_params.name.as_str() {
            "habit_add" => self.call_tool(args, |session, p| {
                tools::add_habit(session, p).map(|r| r.message)
            }),
            "habit_remove" => self.call_tool(args, |session, p| {
                tools::remove_habit(session, p).map(|r| r.message)
            }),
            "habit_check" => self.call_tool(args, |session, p| {
                tools::check_habit(session, p).map(|r| r.message)
            }),
            "habit_list" => self.call_tool(args, |session, p| {
                tools::list_habits(session, p).map(|r| r.message)
            }),
            "habit_summary" => self.call_tool(args, |session, p| {
                tools::get_summary(session, p).map(|(_, message)| message)
            }),
            _ => ToolCallResult::error(format!("Unknown tool: {}", tool_params.name)),
        };

        JsonRpcResponse::from_serializable(id, &result)
    }

    /// Decode tool arguments and run the tool against the session
    fn call_tool<P, F>(&mut self, args: Map<String, Value>, tool: F) -> ToolCallResult
    where
        P: DeserializeOwned,
        F: FnOnce(&mut Session, P) -> Result<String, ToolError>,
    {
        let params: P = match serde_json::from_value(Value::Object(args)) {
            Ok(p) => p,
            Err(e) => return ToolCallResult::error(format!("Invalid arguments: {}", e)),
        };

        match tool(self.habit_tracker.session_mut(), params) {
            Ok(message) => ToolCallResult::success(message),
            Err(e) => {
                warn!("Tool call failed: {}", e);
                ToolCallResult::error(e.to_string())
            }
        }
    }
}

/// JSON schema for a tool's parameter type
fn input_schema<T: JsonSchema>() -> Value {
    serde_json::to_value(schemars::schema_for!(T))
        .unwrap_or_else(|_| json!({"type": "object"}))
}
