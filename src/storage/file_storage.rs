use crate::{
    domain::{NewTicket, Ticket, TicketId, TicketUpdate},
    error::{BoardError, Result},
    storage::{TicketFilter, TicketStore},
};
use async_trait::async_trait;
use chrono::Utc;
use std::path::{Path, PathBuf};
use tokio::fs;

/// File-based ticket store: one JSON document per ticket
pub struct FileTicketStore {
    root_path: PathBuf,
}

impl FileTicketStore {
    const DATA_DIR: &'static str = ".deskboard";
    const TICKETS_DIR: &'static str = "tickets";

    /// Creates a new store for the given project root
    pub fn new(project_root: impl AsRef<Path>) -> Self {
        Self {
            root_path: project_root.as_ref().join(Self::DATA_DIR),
        }
    }

    fn tickets_dir(&self) -> PathBuf {
        self.root_path.join(Self::TICKETS_DIR)
    }

    fn ticket_file(&self, id: &TicketId) -> Result<PathBuf> {
        let raw = id.as_str();
        if raw.is_empty() || raw.contains(['/', '\\']) || raw.starts_with('.') {
            return Err(BoardError::UnknownTicket(raw.to_string()));
        }
        Ok(self.tickets_dir().join(format!("{}.json", raw)))
    }

    async fn ensure_directory_exists(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).await?;
        }
        Ok(())
    }

    /// Creates the directory layout
    pub async fn initialize(&self) -> Result<()> {
        self.ensure_directory_exists(&self.tickets_dir()).await
    }

    pub async fn is_initialized(&self) -> bool {
        self.tickets_dir().exists()
    }

    async fn save(&self, ticket: &Ticket) -> Result<()> {
        self.ensure_directory_exists(&self.tickets_dir()).await?;

        let json = serde_json::to_string_pretty(ticket)?;
        fs::write(self.ticket_file(&ticket.id)?, json).await?;
        Ok(())
    }

    async fn load_all(&self) -> Result<Vec<Ticket>> {
        let tickets_dir = self.tickets_dir();

        if !tickets_dir.exists() {
            return Ok(Vec::new());
        }

        let mut entries = fs::read_dir(&tickets_dir).await?;
        let mut tickets = Vec::new();

        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }
            let contents = fs::read_to_string(&path).await?;
            match serde_json::from_str::<Ticket>(&contents) {
                Ok(ticket) => tickets.push(ticket),
                Err(error) => {
                    tracing::warn!(path = %path.display(), %error, "skipping unreadable ticket file");
                }
            }
        }

        // Directory order is unspecified
        tickets.sort_by(|a, b| a.created.cmp(&b.created).then_with(|| a.id.cmp(&b.id)));
        Ok(tickets)
    }
}

#[async_trait]
impl TicketStore for FileTicketStore {
    async fn list(&self, filter: &TicketFilter) -> Result<Vec<Ticket>> {
        Ok(filter.apply(self.load_all().await?))
    }

    async fn get(&self, id: &TicketId) -> Result<Ticket> {
        let file_path = self.ticket_file(id)?;

        if !file_path.exists() {
            return Err(BoardError::UnknownTicket(id.to_string()));
        }

        let contents = fs::read_to_string(&file_path).await?;
        Ok(serde_json::from_str(&contents)?)
    }

    async fn create(&self, fields: NewTicket) -> Result<Ticket> {
        let ticket = Ticket::from_new(TicketId::generate(), fields, Utc::now());
        self.save(&ticket).await?;
        Ok(ticket)
    }

    async fn update(&self, id: &TicketId, fields: TicketUpdate) -> Result<Ticket> {
        let mut ticket = self.get(id).await?;
        fields.apply(&mut ticket);
        self.save(&ticket).await?;
        Ok(ticket)
    }

    async fn add_comment(&self, id: &TicketId) -> Result<Ticket> {
        let mut ticket = self.get(id).await?;
        ticket.comments = ticket.comments.saturating_add(1);
        self.save(&ticket).await?;
        Ok(ticket)
    }

    async fn delete(&self, id: &TicketId) -> Result<()> {
        let file_path = self.ticket_file(id)?;

        if !file_path.exists() {
            return Err(BoardError::UnknownTicket(id.to_string()));
        }

        fs::remove_file(file_path).await?;
        Ok(())
    }
}
