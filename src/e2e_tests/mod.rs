#[cfg(test)]
mod tests {

    use url::Url;

    use crate::config::DEFAULT_REMOTE_URL;
    use crate::controller::{Filter, Intent, LoadState, LogNotifier, TodoController};
    use crate::remote::{HttpTaskApi, RemoteError, TaskApi};

    fn api() -> HttpTaskApi {
        HttpTaskApi::new(Url::parse(DEFAULT_REMOTE_URL).unwrap())
    }

    #[tokio::test]
    async fn test_e2e_initial_page() {
        let (controller, _rx) = TodoController::new(api(), LogNotifier, 10);

        controller.start().await;

        let snapshot = controller.snapshot();
        assert_eq!(snapshot.load_state, LoadState::Ready);
        assert_eq!(snapshot.total_count, 10, "placeholder store serves 200 todos");

        controller
            .handle(Intent::SetFilter(Filter::Completed))
            .await
            .unwrap();
        let snapshot = controller.snapshot();
        assert!(snapshot.visible_tasks.iter().all(|task| task.completed));
        assert_eq!(snapshot.visible_tasks.len(), snapshot.completed_count);
    }

    #[tokio::test]
    async fn test_e2e_create_then_update() {
        let (controller, _rx) = TodoController::new(api(), LogNotifier, 10);
        controller.start().await;

        controller
            .handle(Intent::ChangeInput("written by e2e".to_string()))
            .await
            .unwrap();
        controller.handle(Intent::SubmitAdd).await.unwrap();

        let snapshot = controller.snapshot();
        assert_eq!(snapshot.total_count, 11);
        let created = snapshot.visible_tasks.last().unwrap().clone();
        assert_eq!(created.title, "written by e2e");

        // existing ids accept updates
        controller
            .handle(Intent::BeginEdit(snapshot.visible_tasks[0].id))
            .await
            .unwrap();
        controller
            .handle(Intent::ChangeInput("renamed by e2e".to_string()))
            .await
            .unwrap();
        controller.handle(Intent::Submit).await.unwrap();
        assert_eq!(controller.snapshot().visible_tasks[0].title, "renamed by e2e");
    }

    #[tokio::test]
    async fn test_e2e_unknown_id_update_fails() {
        // the placeholder store never persists creates, so their ids cannot be updated
        let draft = crate::model::TaskDraft::new(&crate::model::Title::parse("x").unwrap());
        let res = api().update(crate::model::TaskId::from(100_000), &draft).await;
        assert!(matches!(res, Err(RemoteError::Status { .. })));
    }
}
