mod common;

use common::Channel;
use rrbot::errors::domain::DomainError;

#[tokio::test]
async fn help_lists_the_command_set() -> Result<(), DomainError> {
    let mut ch = Channel::new().await;

    let out = ch.say("Anyone", "/help").await?;
    assert_eq!(
        out.reply.public_text().as_deref(),
        Some(
            "General commands: /help /status /play /showturn\n\
             DM commands: /kick /pause /resume /endgame\n\
             To start a fresh game type /start"
        )
    );
    Ok(())
}

#[tokio::test]
async fn status_before_any_game_points_at_start() -> Result<(), DomainError> {
    let mut ch = Channel::new().await;

    let out = ch.say("Anyone", "/status").await?;
    assert_eq!(
        out.reply.public_text().as_deref(),
        Some(
            "Game has not been started in this channel yet. \
             To start a game the designated DM should type /start"
        )
    );
    Ok(())
}

#[tokio::test]
async fn status_reports_roster_turn_and_spoken_state() -> Result<(), DomainError> {
    let mut ch = Channel::new().await;
    ch.start_game("Dana").await?;
    ch.say("Alice", "/play").await?;
    ch.say("Alice", "spoken").await?;

    let out = ch.say("Alice", "/status").await?;
    let text = out.reply.public_text().unwrap();
    assert!(text.starts_with("DM: Dana\nCurrent players: Alice"));
    assert!(text.contains("We are currently on turn #1"));
    assert!(text.contains("The following players have already spoken: Alice"));
    assert!(text.contains("These players are yet to speak: Dana"));
    // Players get the transcript hint, not the join hint.
    assert!(text.contains("Type /showturn ### to view messages on a specific turn"));
    assert!(!text.contains("Type /play to join the game."));
    assert!(!text.contains("Game is paused."));
    Ok(())
}

#[tokio::test]
async fn status_for_outsiders_suggests_joining() -> Result<(), DomainError> {
    let mut ch = Channel::new().await;
    ch.start_game("Dana").await?;
    ch.say("Dana", "/pause").await?;

    let out = ch.say("Passerby", "/status").await?;
    let text = out.reply.public_text().unwrap();
    assert!(text.contains("No one has spoken yet this turn."));
    assert!(text.contains("Everyone may speak."));
    assert!(text.contains("Type /play to join the game."));
    assert!(text.contains("Game is paused."));
    Ok(())
}

#[tokio::test]
async fn showturn_renders_the_transcript_in_channel_order() -> Result<(), DomainError> {
    let mut ch = Channel::new().await;
    ch.start_game("Dana").await?;
    ch.say("Alice", "/play").await?;

    ch.say("Alice", "first words").await?;
    ch.say("Dana", "second words").await?;
    assert_eq!(ch.game().await?.turn_number, 2);

    let out = ch.say("Dana", "/showturn 1").await?;
    assert_eq!(
        out.reply.public_text().as_deref(),
        Some(
            "Here are the messages sent on turn 1 (in order):\n\
             \n\
             Alice: first words\n\
             \n\
             Dana: second words"
        )
    );
    Ok(())
}

#[tokio::test]
async fn showturn_answers_bad_arguments_with_hints() -> Result<(), DomainError> {
    let mut ch = Channel::new().await;
    ch.start_game("Dana").await?;

    let out = ch.say("Dana", "/showturn soon").await?;
    assert_eq!(
        out.reply.public_text().as_deref(),
        Some("Use /showturn ### (where ### is the number of the turn)")
    );

    let out = ch.say("Dana", "/showturn 5").await?;
    assert_eq!(
        out.reply.public_text().as_deref(),
        Some("There is no turn 5, game is currently on turn 1")
    );

    let out = ch.say("Dana", "/showturn 1").await?;
    assert_eq!(
        out.reply.public_text().as_deref(),
        Some("No messages found for turn 1")
    );
    Ok(())
}

#[tokio::test]
async fn pause_and_resume_are_dm_only() -> Result<(), DomainError> {
    let mut ch = Channel::new().await;
    ch.start_game("Dana").await?;
    ch.say("Alice", "/play").await?;

    let out = ch.say("Alice", "/pause").await?;
    assert_eq!(
        out.reply.public_text().as_deref(),
        Some("Only the DM can pause the game.")
    );

    let out = ch.say("Dana", "/pause").await?;
    assert_eq!(
        out.reply.public_text().as_deref(),
        Some("Game paused, everyone may speak freely, messages won't be recorded.")
    );
    assert!(!ch.game().await?.is_running);

    let out = ch.say("Alice", "/resume").await?;
    assert_eq!(
        out.reply.public_text().as_deref(),
        Some("Only the DM can resume the game.")
    );

    let out = ch.say("Dana", "/resume").await?;
    assert_eq!(out.reply.public_text().as_deref(), Some("Game resumed."));
    assert!(ch.game().await?.is_running);
    Ok(())
}

#[tokio::test]
async fn resume_without_a_game_explains_itself() -> Result<(), DomainError> {
    let mut ch = Channel::new().await;

    let out = ch.say("Anyone", "/resume").await?;
    assert_eq!(
        out.reply.public_text().as_deref(),
        Some("No game has been started in this channel yet.")
    );
    Ok(())
}

#[tokio::test]
async fn kick_list_is_numbered_and_dm_only() -> Result<(), DomainError> {
    let mut ch = Channel::new().await;
    ch.start_game("Dana").await?;
    ch.say("Alice", "/play").await?;
    ch.say("Bob", "/play").await?;

    let out = ch.say("Alice", "/kick").await?;
    assert_eq!(
        out.reply.public_text().as_deref(),
        Some("Only the DM can kick players from the game.")
    );

    let out = ch.say("Dana", "/kick").await?;
    assert_eq!(
        out.reply.public_text().as_deref(),
        Some(
            "1. Dana\n2. Alice\n3. Bob\n\
             \n\
             Use /kick ### (where ### is the number of player from the list)"
        )
    );
    Ok(())
}

#[tokio::test]
async fn kick_with_a_bad_number_reprints_the_list() -> Result<(), DomainError> {
    let mut ch = Channel::new().await;
    ch.start_game("Dana").await?;
    ch.say("Alice", "/play").await?;

    for bad in ["/kick 0", "/kick 9", "/kick alice"] {
        let out = ch.say("Dana", bad).await?;
        let text = out.reply.public_text().unwrap();
        assert!(text.starts_with("1. Dana\n2. Alice"), "for input {bad}");
        assert!(text.ends_with(
            "Use /kick ### (where ### is the number of player from the list)"
        ));
    }
    assert_eq!(ch.game().await?.players.len(), 2);
    Ok(())
}

#[tokio::test]
async fn kicked_players_may_rejoin() -> Result<(), DomainError> {
    let mut ch = Channel::new().await;
    ch.start_game("Dana").await?;
    ch.say("Alice", "/play").await?;

    let out = ch.say("Dana", "/kick 2").await?;
    assert!(out
        .reply
        .public_text()
        .unwrap()
        .contains("Alice has been removed from the game (but may still rejoin)."));
    assert_eq!(ch.game().await?.players.len(), 1);

    let out = ch.say("Alice", "/play").await?;
    assert!(out.reply.public_text().unwrap().contains("Alice has just joined"));
    assert_eq!(ch.game().await?.players.len(), 2);
    Ok(())
}

#[tokio::test]
async fn nudge_is_accepted_silently() -> Result<(), DomainError> {
    let mut ch = Channel::new().await;
    ch.start_game("Dana").await?;

    let out = ch.say("Dana", "/nudge").await?;
    assert_eq!(out.reply.public_text(), None);

    // It is a command, not an utterance: nothing was recorded.
    let game = ch.game().await?;
    assert!(!game.players[0].has_spoken);
    Ok(())
}
